// Wire-format tests for the OSC encoder.
//
// The encoder is checked against rosc's decoder, which stands in for the
// receiver under test, and against the literal byte layout for /jawOpen.

use assert2::{assert, check, let_assert};
use float_cmp::approx_eq;
use rosc::{OscPacket, OscType, decoder};

use tracker_osc_probe::catalog::{EYE_MESSAGES, FACE_MESSAGES};
use tracker_osc_probe::osc::encoder::{encode, encoded_len};
use tracker_osc_probe::OscMessage;

/// Decodes one datagram with rosc and returns its (address, float) pair.
fn decode_float_message(bytes: &[u8]) -> (String, f32) {
    let_assert!(Ok((rest, packet)) = decoder::decode_udp(bytes));
    assert!(rest.is_empty());
    let_assert!(OscPacket::Message(msg) = packet);
    assert!(msg.args.len() == 1);
    let_assert!(OscType::Float(value) = msg.args[0].clone());
    (msg.addr, value)
}

#[test]
fn jaw_open_matches_reference_bytes() {
    let msg = OscMessage::new("/jawOpen", 0.5).unwrap();
    let bytes = encode(&msg);

    check!(&bytes[..11] == &[0x2F, 0x6A, 0x61, 0x77, 0x4F, 0x70, 0x65, 0x6E, 0x00, 0x00, 0x00]);
    check!(&bytes[12..16] == &[0x2C, 0x66, 0x00, 0x00]);
    check!(&bytes[16..] == &[0x3F, 0x00, 0x00, 0x00]);
    check!(bytes.len() == 20);
}

#[test]
fn catalog_messages_decode_to_their_inputs() {
    for &(address, value) in FACE_MESSAGES.iter().chain(EYE_MESSAGES.iter()) {
        let msg = OscMessage::new(address, value).unwrap();
        let (decoded_addr, decoded_value) = decode_float_message(&encode(&msg));
        check!(decoded_addr == address);
        check!(decoded_value.to_bits() == value.to_bits(), "{address}");
    }
}

#[test]
fn arbitrary_addresses_and_values_survive_decoding() {
    let addresses = ["/a", "/ab", "/abc", "/abcd", "/avatar/parameters/EyesY", "/x/y/z/w"];
    let values = [0.0f32, -0.0, 1.0, -1.0, 0.123_456_7, f32::MAX, f32::MIN_POSITIVE, -3.5e-12];

    for address in addresses {
        for value in values {
            let msg = OscMessage::new(address, value).unwrap();
            let bytes = encode(&msg);
            check!(bytes.len() == encoded_len(&msg));
            let (decoded_addr, decoded_value) = decode_float_message(&bytes);
            check!(decoded_addr == address);
            check!(approx_eq!(f32, decoded_value, value, ulps = 0));
        }
    }
}

#[test]
fn address_and_type_tag_segments_are_aligned_and_terminated() {
    for len in 1..=16 {
        let address = format!("/{}", "q".repeat(len - 1));
        let msg = OscMessage::new(address.as_str(), 0.25).unwrap();
        let bytes = encode(&msg);

        // Address segment runs up to the ',' that opens the type tags.
        let_assert!(Some(tag_start) = bytes.iter().position(|&b| b == b','));
        check!(tag_start % 4 == 0, "address segment for {address:?}");
        check!(tag_start > address.len());
        check!(bytes[address.len()..tag_start].iter().all(|&b| b == 0));

        let tags = &bytes[tag_start..bytes.len() - 4];
        check!(tags.len() % 4 == 0);
        check!(tags == &[b',', b'f', 0, 0]);
        check!(bytes.len() % 4 == 0);
    }
}
