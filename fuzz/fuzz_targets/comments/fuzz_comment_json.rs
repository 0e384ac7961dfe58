// Run with: cargo fuzz run fuzz_comment_json
// Feeds arbitrary JSON through CommentPayload -> Comment for both create and patch.
#![no_main]

use commenthub::domain::{Comment, CommentPayload, CommentRecord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = serde_json::from_slice::<CommentPayload>(data) {
        if let Ok(comment) = Comment::for_create(payload.clone()) {
            assert!(comment.id.is_none());
            // Anything accepted once must be accepted again from its stored form
            let reparsed = Comment::try_from(CommentRecord::from(&comment));
            assert_eq!(reparsed.as_ref(), Ok(&comment));
        }
        let _ = Comment::for_patch(payload);
    }
});
