// Generated by dbc_gen. Do not edit.
#![allow(non_camel_case_types, non_snake_case, dead_code, unused_variables, unused_mut, unused_imports, unreachable_patterns)]

#[path = "testbench_test_msg.rs"]
pub mod test_msg;
#[path = "testbench_mux_msg.rs"]
pub mod mux_msg;
#[path = "testbench_status_msg.rs"]
pub mod status_msg;
#[path = "testbench_info_msg.rs"]
pub mod info_msg;
#[path = "testbench_parser.rs"]
pub mod parser;

pub const NAME: &str = "testbench";
pub const MESSAGE_IDS: [u32; 4] = [100, 200, 300, 400];

/// Which message a frame id resolved to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u32)]
pub enum Messages {
    #[default]
    Unknown = 0xFFFF_FFFF,
    TestMsg = 100,
    MuxMsg = 200,
    StatusMsg = 300,
    InfoMsg = 400,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct testbench_t {
    pub TestMsg: test_msg::TestMsg,
    pub MuxMsg: mux_msg::MuxMsg,
    pub StatusMsg: status_msg::StatusMsg,
    pub InfoMsg: info_msg::InfoMsg,
}

impl testbench_t {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes one frame payload to the matching message codec and
    /// decodes it in place.
    pub fn decode(&mut self, id: u32, data: &[u8; 8]) -> Messages {
        if id == test_msg::ID {
            self.TestMsg.decode(data);
            return Messages::TestMsg;
        }
        if id == mux_msg::ID {
            self.MuxMsg.decode(data);
            return Messages::MuxMsg;
        }
        if id == status_msg::ID {
            self.StatusMsg.decode(data);
            return Messages::StatusMsg;
        }
        if id == info_msg::ID {
            self.InfoMsg.decode(data);
            return Messages::InfoMsg;
        }
        Messages::Unknown
    }

    pub fn message_name(message: Messages) -> &'static str {
        match message {
            Messages::TestMsg => test_msg::NAME,
            Messages::MuxMsg => mux_msg::NAME,
            Messages::StatusMsg => status_msg::NAME,
            Messages::InfoMsg => info_msg::NAME,
            Messages::Unknown => "Unknown",
        }
    }

    pub fn message_name_by_id(id: u32) -> &'static str {
        if id == test_msg::ID {
            return test_msg::NAME;
        }
        if id == mux_msg::ID {
            return mux_msg::NAME;
        }
        if id == status_msg::ID {
            return status_msg::NAME;
        }
        if id == info_msg::ID {
            return info_msg::NAME;
        }
        "Unknown"
    }
}
