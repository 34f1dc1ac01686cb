//! Property-based tests for socket frames

use chatline::shared::{ClientEvent, MessageEvent};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_send_message_frame_keeps_text(
        sender in "[a-z0-9-]{1,36}",
        receiver in "[a-z0-9-]{0,36}",
        text in ".*",
    ) {
        let frame = serde_json::json!({
            "event": "sendMessage",
            "data": { "senderId": sender, "receiverId": receiver, "message": text }
        });

        let event: ClientEvent = serde_json::from_value(frame).unwrap();
        prop_assert_eq!(
            event,
            ClientEvent::SendMessage(MessageEvent {
                sender_id: sender,
                receiver_id: receiver,
                message: text,
                conversation_id: String::new(),
            })
        );
    }

    #[test]
    fn test_arbitrary_text_never_panics(frame in ".*") {
        let _ = serde_json::from_str::<ClientEvent>(&frame);
    }
}
