use super::*;

#[tokio::test]
async fn write_then_read_round_trips() {
    let mut buffer = Vec::new();
    write_message(&mut buffer, b"hello").await.unwrap();
    assert_eq!(buffer, b"hello\0");

    let mut reader = MessageReader::new(std::io::Cursor::new(buffer));
    let message = reader.read_message().await.unwrap();
    assert_eq!(message, b"hello");
}

#[tokio::test]
async fn leftover_bytes_past_nul_start_the_next_message() {
    let mut buffer = Vec::new();
    buffer.extend_from_slice(b"first\0second\0");
    let mut reader = MessageReader::new(std::io::Cursor::new(buffer));
    assert_eq!(reader.read_message().await.unwrap(), b"first");
    assert_eq!(reader.read_message().await.unwrap(), b"second");
}

#[tokio::test]
async fn connection_closed_before_nul_is_an_error() {
    let buffer = b"no terminator here".to_vec();
    let mut reader = MessageReader::new(std::io::Cursor::new(buffer));
    assert!(matches!(
        reader.read_message().await.unwrap_err(),
        FramingError::ConnectionClosed
    ));
}

#[tokio::test]
async fn oversized_message_is_fatal() {
    let mut buffer = vec![b'a'; MAX_MESSAGE_BYTES + 1];
    buffer.push(0);
    let mut reader = MessageReader::new(std::io::Cursor::new(buffer));
    assert!(matches!(
        reader.read_message().await.unwrap_err(),
        FramingError::MessageTooLarge
    ));
}
