//! Dispatcher rendering: the `<base>_parser.rs` module routing raw frames to
//! per-message callbacks and cross-message aggregators.

use crate::types::ast::Database;

use super::{snake_ident, unique_messages};

/// Renders the dispatcher module.
pub(crate) fn render_parser(base: &str, db: &Database) -> String {
    let unique = unique_messages(db);
    let mut out = String::new();
    out.push_str("// Generated by dbc_gen. Do not edit.\n");
    out.push_str("#![allow(non_camel_case_types, non_snake_case, dead_code, unused_variables, unused_mut, unused_imports, unreachable_patterns)]\n");
    out.push('\n');
    out.push_str("use dbc_gen::rt::MessageAggregator;\n");
    out.push('\n');
    out.push_str(&format!("use super::{{Messages, {base}_t}};\n"));
    out.push('\n');

    out.push_str("/// Routes incoming CAN frames into the shared database and fires the\n");
    out.push_str("/// registered callbacks. Multiplexed messages only fire once every mux\n");
    out.push_str("/// group of the current batch has been decoded.\n");
    out.push_str(&format!("pub struct {base}_parser {{\n"));
    out.push_str(&format!("    db: {base}_t,\n"));
    for msg in &unique {
        out.push_str(&format!(
            "    on_{}: Option<Box<dyn FnMut(&super::{}::{})>>,\n",
            msg.name,
            snake_ident(&msg.name),
            msg.name
        ));
    }
    out.push_str(&format!("    aggregators: Vec<MessageAggregator<{base}_t>>,\n"));
    out.push_str("}\n\n");

    out.push_str(&format!("impl {base}_parser {{\n"));
    out.push_str("    pub fn new() -> Self {\n");
    out.push_str(&format!("        {base}_parser {{\n"));
    out.push_str(&format!("            db: {base}_t::new(),\n"));
    for msg in &unique {
        out.push_str(&format!("            on_{}: None,\n", msg.name));
    }
    out.push_str("            aggregators: Vec::new(),\n");
    out.push_str("        }\n");
    out.push_str("    }\n\n");

    out.push_str("    /// Decodes one frame and fires the matching callbacks. Returns\n");
    out.push_str("    /// `false` when no message carries the id.\n");
    out.push_str("    pub fn handle_can_frame(&mut self, id: u32, data: &[u8; 8]) -> bool {\n");
    out.push_str("        match self.db.decode(id, data) {\n");
    for msg in &unique {
        out.push_str(&format!("            Messages::{} => {{\n", msg.name));
        if msg.multiplexor().is_some() {
            out.push_str(&format!(
                "                if self.db.{}.all_multiplexed_indexes_seen() {{\n",
                msg.name
            ));
            out.push_str(&format!(
                "                    if let Some(handler) = self.on_{}.as_mut() {{\n",
                msg.name
            ));
            out.push_str(&format!("                        handler(&self.db.{});\n", msg.name));
            out.push_str("                    }\n");
            out.push_str("                    for aggregator in self.aggregators.iter_mut() {\n");
            out.push_str(&format!(
                "                        aggregator.observe(Messages::{} as u32, &self.db);\n",
                msg.name
            ));
            out.push_str("                    }\n");
            out.push_str(&format!(
                "                    self.db.{}.clear_seen_multiplexed_indexes();\n",
                msg.name
            ));
            out.push_str("                }\n");
        } else {
            out.push_str(&format!(
                "                if let Some(handler) = self.on_{}.as_mut() {{\n",
                msg.name
            ));
            out.push_str(&format!("                    handler(&self.db.{});\n", msg.name));
            out.push_str("                }\n");
            out.push_str("                for aggregator in self.aggregators.iter_mut() {\n");
            out.push_str(&format!(
                "                    aggregator.observe(Messages::{} as u32, &self.db);\n",
                msg.name
            ));
            out.push_str("                }\n");
        }
        out.push_str("                true\n");
        out.push_str("            }\n");
    }
    out.push_str("            Messages::Unknown => false,\n");
    out.push_str("        }\n");
    out.push_str("    }\n\n");

    for msg in &unique {
        out.push_str(&format!(
            "    pub fn on_{}(&mut self, handler: Box<dyn FnMut(&super::{}::{})>) {{\n",
            msg.name,
            snake_ident(&msg.name),
            msg.name
        ));
        out.push_str(&format!("        self.on_{} = Some(handler);\n", msg.name));
        out.push_str("    }\n\n");
    }

    out.push_str("    /// Registers a completion callback over an ordered message set. The\n");
    out.push_str("    /// first entry is the primary: the others only count while it has\n");
    out.push_str("    /// been seen in the current round.\n");
    out.push_str("    pub fn add_message_aggregator(\n");
    out.push_str("        &mut self,\n");
    out.push_str("        messages: &[Messages],\n");
    out.push_str(&format!("        on_complete: Box<dyn FnMut(&{base}_t)>,\n"));
    out.push_str("    ) {\n");
    out.push_str("        let ids = messages.iter().map(|&m| m as u32).collect();\n");
    out.push_str("        self.aggregators.push(MessageAggregator::new(ids, on_complete));\n");
    out.push_str("    }\n\n");

    out.push_str(&format!("    pub fn get_db(&self) -> &{base}_t {{\n"));
    out.push_str("        &self.db\n");
    out.push_str("    }\n");
    out.push_str("}\n\n");

    out.push_str(&format!("impl Default for {base}_parser {{\n"));
    out.push_str("    fn default() -> Self {\n");
    out.push_str(&format!("        {base}_parser::new()\n"));
    out.push_str("    }\n");
    out.push_str("}\n");
    out
}
