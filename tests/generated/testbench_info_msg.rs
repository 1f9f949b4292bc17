// Generated by dbc_gen. Do not edit.
#![allow(non_camel_case_types, non_snake_case, dead_code, unused_variables, unused_mut, unused_imports, unreachable_patterns)]

use dbc_gen::rt;

pub const NAME: &str = "InfoMsg";
pub const ID: u32 = 400;
pub const DLC: u32 = 8;
pub const TRANSMITTER: &str = "ECU2";
pub const COMMENT: &str = "";
pub const IS_MULTIPLEXED: bool = false;
pub const SIGNAL_COUNT: usize = 0;
pub const SIGNAL_NAMES: [&str; 0] = [];

#[derive(Clone, Debug, PartialEq)]
pub struct InfoMsg {
}

impl InfoMsg {
    pub fn new() -> Self {
        InfoMsg {
        }
    }

    /// Unpacks one frame payload into the struct fields.
    pub fn decode(&mut self, data: &[u8; 8]) -> bool {
        true
    }

    /// Packs the struct fields into a frame payload.
    pub fn encode(&self) -> [u8; 8] {
        let mut data = [0u8; 8];
        data
    }
}

impl Default for InfoMsg {
    fn default() -> Self {
        InfoMsg::new()
    }
}
