// Generated by dbc_gen. Do not edit.
#![allow(non_camel_case_types, non_snake_case, dead_code, unused_variables, unused_mut, unused_imports, unreachable_patterns)]

use dbc_gen::rt::MessageAggregator;

use super::{Messages, testbench_t};

/// Routes incoming CAN frames into the shared database and fires the
/// registered callbacks. Multiplexed messages only fire once every mux
/// group of the current batch has been decoded.
pub struct testbench_parser {
    db: testbench_t,
    on_TestMsg: Option<Box<dyn FnMut(&super::test_msg::TestMsg)>>,
    on_MuxMsg: Option<Box<dyn FnMut(&super::mux_msg::MuxMsg)>>,
    on_StatusMsg: Option<Box<dyn FnMut(&super::status_msg::StatusMsg)>>,
    on_InfoMsg: Option<Box<dyn FnMut(&super::info_msg::InfoMsg)>>,
    aggregators: Vec<MessageAggregator<testbench_t>>,
}

impl testbench_parser {
    pub fn new() -> Self {
        testbench_parser {
            db: testbench_t::new(),
            on_TestMsg: None,
            on_MuxMsg: None,
            on_StatusMsg: None,
            on_InfoMsg: None,
            aggregators: Vec::new(),
        }
    }

    /// Decodes one frame and fires the matching callbacks. Returns
    /// `false` when no message carries the id.
    pub fn handle_can_frame(&mut self, id: u32, data: &[u8; 8]) -> bool {
        match self.db.decode(id, data) {
            Messages::TestMsg => {
                if let Some(handler) = self.on_TestMsg.as_mut() {
                    handler(&self.db.TestMsg);
                }
                for aggregator in self.aggregators.iter_mut() {
                    aggregator.observe(Messages::TestMsg as u32, &self.db);
                }
                true
            }
            Messages::MuxMsg => {
                if self.db.MuxMsg.all_multiplexed_indexes_seen() {
                    if let Some(handler) = self.on_MuxMsg.as_mut() {
                        handler(&self.db.MuxMsg);
                    }
                    for aggregator in self.aggregators.iter_mut() {
                        aggregator.observe(Messages::MuxMsg as u32, &self.db);
                    }
                    self.db.MuxMsg.clear_seen_multiplexed_indexes();
                }
                true
            }
            Messages::StatusMsg => {
                if let Some(handler) = self.on_StatusMsg.as_mut() {
                    handler(&self.db.StatusMsg);
                }
                for aggregator in self.aggregators.iter_mut() {
                    aggregator.observe(Messages::StatusMsg as u32, &self.db);
                }
                true
            }
            Messages::InfoMsg => {
                if let Some(handler) = self.on_InfoMsg.as_mut() {
                    handler(&self.db.InfoMsg);
                }
                for aggregator in self.aggregators.iter_mut() {
                    aggregator.observe(Messages::InfoMsg as u32, &self.db);
                }
                true
            }
            Messages::Unknown => false,
        }
    }

    pub fn on_TestMsg(&mut self, handler: Box<dyn FnMut(&super::test_msg::TestMsg)>) {
        self.on_TestMsg = Some(handler);
    }

    pub fn on_MuxMsg(&mut self, handler: Box<dyn FnMut(&super::mux_msg::MuxMsg)>) {
        self.on_MuxMsg = Some(handler);
    }

    pub fn on_StatusMsg(&mut self, handler: Box<dyn FnMut(&super::status_msg::StatusMsg)>) {
        self.on_StatusMsg = Some(handler);
    }

    pub fn on_InfoMsg(&mut self, handler: Box<dyn FnMut(&super::info_msg::InfoMsg)>) {
        self.on_InfoMsg = Some(handler);
    }

    /// Registers a completion callback over an ordered message set. The
    /// first entry is the primary: the others only count while it has
    /// been seen in the current round.
    pub fn add_message_aggregator(
        &mut self,
        messages: &[Messages],
        on_complete: Box<dyn FnMut(&testbench_t)>,
    ) {
        let ids = messages.iter().map(|&m| m as u32).collect();
        self.aggregators.push(MessageAggregator::new(ids, on_complete));
    }

    pub fn get_db(&self) -> &testbench_t {
        &self.db
    }
}

impl Default for testbench_parser {
    fn default() -> Self {
        testbench_parser::new()
    }
}
