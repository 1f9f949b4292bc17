// Generated by dbc_gen. Do not edit.
#![allow(non_camel_case_types, non_snake_case, dead_code, unused_variables, unused_mut, unused_imports, unreachable_patterns)]

use dbc_gen::rt;

pub const NAME: &str = "TestMsg";
pub const ID: u32 = 100;
pub const DLC: u32 = 8;
pub const TRANSMITTER: &str = "ECU1";
pub const COMMENT: &str = "Main test message";
pub const IS_MULTIPLEXED: bool = false;
pub const SIGNAL_COUNT: usize = 3;
pub const SIGNAL_NAMES: [&str; 3] = ["Speed", "Temp", "Mode"];

pub mod Speed {
    pub const START_BIT: u32 = 0;
    pub const LENGTH: u32 = 16;
    pub const LITTLE_ENDIAN: bool = true;
    pub const IS_SIGNED: bool = false;
    pub const SCALE: f64 = 0.1;
    pub const OFFSET: f64 = 0.0;
    pub const MINIMUM: f64 = 0.0;
    pub const MAXIMUM: f64 = 6553.5;
    pub const UNIT: &str = "km/h";
}

pub mod Temp {
    pub const START_BIT: u32 = 16;
    pub const LENGTH: u32 = 8;
    pub const LITTLE_ENDIAN: bool = true;
    pub const IS_SIGNED: bool = true;
    pub const SCALE: f64 = 1.0;
    pub const OFFSET: f64 = 0.0;
    pub const MINIMUM: f64 = -128.0;
    pub const MAXIMUM: f64 = 127.0;
    pub const UNIT: &str = "degC";
}

pub mod Mode {
    pub const START_BIT: u32 = 24;
    pub const LENGTH: u32 = 2;
    pub const LITTLE_ENDIAN: bool = true;
    pub const IS_SIGNED: bool = false;
    pub const SCALE: f64 = 1.0;
    pub const OFFSET: f64 = 0.0;
    pub const MINIMUM: f64 = 0.0;
    pub const MAXIMUM: f64 = 3.0;
    pub const UNIT: &str = "";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(i64)]
pub enum Mode_values {
    #[default]
    Off = 0,
    On_1 = 1,
    On_2 = 2,
}

impl Mode_values {
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Mode_values::Off,
            1 => Mode_values::On_1,
            2 => Mode_values::On_2,
            _ => Mode_values::default(),
        }
    }

    pub fn raw(self) -> i64 {
        self as i64
    }
}

/// Main test message
#[derive(Clone, Debug, PartialEq)]
pub struct TestMsg {
    /// Vehicle speed
    pub Speed: f64,
    pub Temp: i64,
    pub Mode: Mode_values,
}

impl TestMsg {
    pub fn new() -> Self {
        TestMsg {
            Speed: 0.0,
            Temp: 0,
            Mode: Mode_values::default(),
        }
    }

    /// Unpacks one frame payload into the struct fields.
    pub fn decode(&mut self, data: &[u8; 8]) -> bool {
        self.Speed = rt::extract_bits(data, 0, 16, true) as f64 * 0.1 + 0.0;
        self.Temp = rt::sign_extend(rt::extract_bits(data, 16, 8, true), 8);
        self.Mode = Mode_values::from_raw(rt::extract_bits(data, 24, 2, true) as i64);
        true
    }

    /// Packs the struct fields into a frame payload.
    pub fn encode(&self) -> [u8; 8] {
        let mut data = [0u8; 8];
        rt::insert_bits(&mut data, 0, 16, true, rt::to_raw(self.Speed, 0.1, 0.0, 16, false));
        rt::insert_bits(&mut data, 16, 8, true, rt::clamp_signed(self.Temp, 8));
        rt::insert_bits(&mut data, 24, 2, true, rt::clamp_unsigned(self.Mode.raw() as u64, 2));
        data
    }
}

impl Default for TestMsg {
    fn default() -> Self {
        TestMsg::new()
    }
}
