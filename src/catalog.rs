//! The canned message lists the receiver under test expects, verbatim.

use std::fmt;

/// Which receiver socket a catalog is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Face,
    Eye,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Channel::Face => f.write_str("face"),
            Channel::Eye => f.write_str("eye"),
        }
    }
}

pub const FACE_MESSAGES: [(&str, f32); 10] = [
    ("/jawOpen", 0.5),
    ("/mouthSmileLeft", 0.3),
    ("/mouthSmileRight", 0.3),
    ("/mouthFrownLeft", 0.1),
    ("/mouthFrownRight", 0.1),
    ("/cheekPuffLeft", 0.2),
    ("/cheekPuffRight", 0.2),
    ("/tongueOut", 0.4),
    ("/mouthFunnel", 0.3),
    ("/mouthPucker", 0.2),
];

pub const EYE_MESSAGES: [(&str, f32); 6] = [
    ("/RightEyeLidExpandedSqueeze", 0.8),
    ("/LeftEyeLidExpandedSqueeze", 0.8),
    ("/RightEyeX", 0.1),
    ("/LeftEyeX", -0.1),
    ("/EyesY", 0.2),
    ("/EyesDilation", 0.6),
];

pub fn messages_for(channel: Channel) -> &'static [(&'static str, f32)] {
    match channel {
        Channel::Face => &FACE_MESSAGES,
        Channel::Eye => &EYE_MESSAGES,
    }
}

/// Value of the n-th continuous-mode message: a sawtooth from 0.00 to 0.99.
pub fn continuous_value(n: u64) -> f32 {
    (n % 100) as f32 / 100.0
}
