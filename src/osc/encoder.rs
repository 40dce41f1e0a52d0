// OSC 1.0 encoding for single-float messages.
//
// Layout: padded address, padded type tag string ",f", big-endian float32.
// Strings are NUL-terminated and padded with NULs to a 4-byte boundary.

use super::message::OscMessage;

const FLOAT_TYPE_TAGS: &str = ",f";

/// Length of a string once NUL-terminated and padded to a multiple of 4.
fn padded_len(s: &str) -> usize {
    (s.len() + 4) & !3
}

fn write_padded_str(buf: &mut Vec<u8>, s: &str) {
    let start = buf.len();
    buf.extend_from_slice(s.as_bytes());
    buf.resize(start + padded_len(s), 0);
}

pub fn encoded_len(msg: &OscMessage) -> usize {
    padded_len(msg.address()) + padded_len(FLOAT_TYPE_TAGS) + 4
}

/// Encodes `msg` into the payload of one UDP datagram.
pub fn encode(msg: &OscMessage) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(msg));
    write_padded_str(&mut buf, msg.address());
    write_padded_str(&mut buf, FLOAT_TYPE_TAGS);
    buf.extend_from_slice(&msg.argument().to_be_bytes());
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_always_leaves_a_terminator() {
        assert_eq!(padded_len(""), 4);
        assert_eq!(padded_len("/a"), 4);
        assert_eq!(padded_len("/ab"), 4);
        assert_eq!(padded_len("/abc"), 8);
        assert_eq!(padded_len("/jawOpen"), 12);
    }

    #[test]
    fn encodes_jaw_open() {
        let msg = OscMessage::new("/jawOpen", 0.5).unwrap();
        let expected: Vec<u8> = vec![
            0x2F, 0x6A, 0x61, 0x77, 0x4F, 0x70, 0x65, 0x6E, 0x00, 0x00, 0x00, 0x00, // /jawOpen
            0x2C, 0x66, 0x00, 0x00, // ,f
            0x3F, 0x00, 0x00, 0x00, // 0.5
        ];
        assert_eq!(encode(&msg), expected);
        assert_eq!(encoded_len(&msg), expected.len());
    }

    #[test]
    fn negative_values_are_big_endian() {
        let msg = OscMessage::new("/LeftEyeX", -0.1).unwrap();
        let bytes = encode(&msg);
        assert_eq!(&bytes[bytes.len() - 4..], &(-0.1f32).to_be_bytes());
    }
}
