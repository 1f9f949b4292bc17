// Generated by dbc_gen. Do not edit.
#![allow(non_camel_case_types, non_snake_case, dead_code, unused_variables, unused_mut, unused_imports, unreachable_patterns)]

use dbc_gen::rt;

pub const NAME: &str = "MuxMsg";
pub const ID: u32 = 200;
pub const DLC: u32 = 8;
pub const TRANSMITTER: &str = "ECU1";
pub const COMMENT: &str = "";
pub const IS_MULTIPLEXED: bool = true;
pub const SIGNAL_COUNT: usize = 4;
pub const SIGNAL_NAMES: [&str; 4] = ["MuxSel", "ValA", "ValB", "ValC"];
pub const MULTIPLEXOR_NAME: &str = "MuxSel";
pub const MUX_GROUP_INDEXES: [u32; 3] = [0, 1, 2];
pub const START_MUX_GROUP_INDEX: u32 = 0;

pub mod MuxSel {
    pub const START_BIT: u32 = 0;
    pub const LENGTH: u32 = 8;
    pub const LITTLE_ENDIAN: bool = true;
    pub const IS_SIGNED: bool = false;
    pub const SCALE: f64 = 1.0;
    pub const OFFSET: f64 = 0.0;
    pub const MINIMUM: f64 = 0.0;
    pub const MAXIMUM: f64 = 2.0;
    pub const UNIT: &str = "";
}

pub mod ValA {
    pub const START_BIT: u32 = 8;
    pub const LENGTH: u32 = 16;
    pub const LITTLE_ENDIAN: bool = true;
    pub const IS_SIGNED: bool = false;
    pub const SCALE: f64 = 1.0;
    pub const OFFSET: f64 = 0.0;
    pub const MINIMUM: f64 = 0.0;
    pub const MAXIMUM: f64 = 65535.0;
    pub const UNIT: &str = "";
}

pub mod ValB {
    pub const START_BIT: u32 = 8;
    pub const LENGTH: u32 = 16;
    pub const LITTLE_ENDIAN: bool = true;
    pub const IS_SIGNED: bool = false;
    pub const SCALE: f64 = 1.0;
    pub const OFFSET: f64 = 0.0;
    pub const MINIMUM: f64 = 0.0;
    pub const MAXIMUM: f64 = 65535.0;
    pub const UNIT: &str = "";
}

pub mod ValC {
    pub const START_BIT: u32 = 8;
    pub const LENGTH: u32 = 16;
    pub const LITTLE_ENDIAN: bool = true;
    pub const IS_SIGNED: bool = false;
    pub const SCALE: f64 = 1.0;
    pub const OFFSET: f64 = 0.0;
    pub const MINIMUM: f64 = 0.0;
    pub const MAXIMUM: f64 = 65535.0;
    pub const UNIT: &str = "";
}

#[derive(Clone, Debug, PartialEq)]
pub struct MuxMsg {
    pub MuxSel: u64,
    pub ValA: u64,
    pub ValB: u64,
    pub ValC: u64,
    seen_mux: rt::SeenSet,
}

impl MuxMsg {
    pub fn new() -> Self {
        MuxMsg {
            MuxSel: 0,
            ValA: 0,
            ValB: 0,
            ValC: 0,
            seen_mux: rt::SeenSet::new(vec![0, 1, 2]),
        }
    }

    /// Unpacks one frame payload into the struct fields.
    pub fn decode(&mut self, data: &[u8; 8]) -> bool {
        self.MuxSel = rt::extract_bits(data, 0, 8, true);
        let group = self.MuxSel as u32;
        match group {
            0 => {
                self.ValA = rt::extract_bits(data, 8, 16, true);
            }
            1 => {
                self.ValB = rt::extract_bits(data, 8, 16, true);
            }
            2 => {
                self.ValC = rt::extract_bits(data, 8, 16, true);
            }
            _ => {}
        }
        self.seen_mux.mark(group);
        true
    }

    /// Packs the struct fields into a frame payload.
    pub fn encode(&self) -> [u8; 8] {
        let mut data = [0u8; 8];
        rt::insert_bits(&mut data, 0, 8, true, rt::clamp_unsigned(self.MuxSel, 8));
        match self.MuxSel as u32 {
            0 => {
                rt::insert_bits(&mut data, 8, 16, true, rt::clamp_unsigned(self.ValA, 16));
            }
            1 => {
                rt::insert_bits(&mut data, 8, 16, true, rt::clamp_unsigned(self.ValB, 16));
            }
            2 => {
                rt::insert_bits(&mut data, 8, 16, true, rt::clamp_unsigned(self.ValC, 16));
            }
            _ => {}
        }
        data
    }

    /// `true` once every declared mux group has been decoded since the
    /// last clear.
    pub fn all_multiplexed_indexes_seen(&self) -> bool {
        self.seen_mux.all_seen()
    }

    pub fn clear_seen_multiplexed_indexes(&mut self) {
        self.seen_mux.reset()
    }
}

impl Default for MuxMsg {
    fn default() -> Self {
        MuxMsg::new()
    }
}
