use serde_derive::Serialize;

/// One raw-integer → symbolic-name association from a `VAL_` line.
///
/// Descriptions are normalized by the parser to be identifier-safe and unique
/// per signal (colliding descriptions get their raw value appended).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ValueMapping {
    /// Raw integer code on the wire.
    pub raw_value: i64,
    /// Identifier-safe symbolic name.
    pub description: String,
}

/// Definition of a signal within a CAN message (DBC `SG_` line).
///
/// Describes position/bit-length, endianness, sign, scaling (scale/offset),
/// valid range, unit, value table, multiplexing role and receiver nodes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Signal {
    /// Signal name.
    pub name: String,
    /// Bit start in the payload (bit 0 = LSB of the first byte).
    pub start_bit: u32,
    /// Bit length (1..=64).
    pub length: u32,
    /// `true` = little-endian (Intel, `@1`), `false` = big-endian (Motorola, `@0`).
    pub little_endian: bool,
    /// `true` when the raw value is two's-complement signed (`-` marker).
    pub is_signed: bool,
    /// `true` if this signal is gated by a multiplexor (`m<idx>` marker).
    pub is_multiplex: bool,
    /// `true` if this signal is the multiplexor switch (`M` marker).
    pub is_multiplexor: bool,
    /// Mux group index; meaningful only when `is_multiplex` is set.
    pub multiplexed_group_idx: u32,
    /// Scaling factor.
    pub scale: f64,
    /// Scaling offset.
    pub offset: f64,
    /// Minimum physical value.
    pub minimum: f64,
    /// Maximum physical value.
    pub maximum: f64,
    /// Unit of measure.
    pub unit: String,
    /// Receiver nodes (ECUs).
    pub receivers: Vec<String>,
    /// Value table from `VAL_`; non-empty means the decoded type is an enumeration.
    pub value_table: Vec<ValueMapping>,
    /// Associated comment (DBC `CM_ SG_` section).
    pub comment: String,
}

impl Default for Signal {
    fn default() -> Self {
        Signal {
            name: String::new(),
            start_bit: 0,
            length: 0,
            little_endian: true,
            is_signed: false,
            is_multiplex: false,
            is_multiplexor: false,
            multiplexed_group_idx: 0,
            scale: 1.0,
            offset: 0.0,
            minimum: 0.0,
            maximum: 0.0,
            unit: String::new(),
            receivers: Vec::new(),
            value_table: Vec::new(),
            comment: String::new(),
        }
    }
}

impl Signal {
    /// `true` when the signal carries a value table; such signals decode to
    /// the raw integer and ignore scale/offset.
    pub fn has_value_table(&self) -> bool {
        !self.value_table.is_empty()
    }

    /// `true` for signals that are neither the multiplexor nor gated by one.
    pub fn is_plain(&self) -> bool {
        !self.is_multiplex && !self.is_multiplexor
    }
}

/// One CAN identifier's schema (DBC `BO_` block and its `SG_` lines).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Message {
    /// Numeric CAN ID.
    pub id: u32,
    /// Message name.
    pub name: String,
    /// Declared payload length in bytes.
    pub dlc: u32,
    /// Transmitting node.
    pub transmitter: String,
    /// Associated comment (DBC `CM_ BO_` section).
    pub comment: String,
    /// `true` iff at least one signal carries a mux marker.
    pub is_multiplexed: bool,
    /// Signals in declaration order.
    pub signals: Vec<Signal>,
}

impl Message {
    /// The multiplexor switch signal, if any. At most one per message.
    pub fn multiplexor(&self) -> Option<&Signal> {
        self.signals.iter().find(|s| s.is_multiplexor)
    }

    /// Declared mux group indexes, ascending and deduplicated.
    pub fn mux_group_indexes(&self) -> Vec<u32> {
        let mut indexes: Vec<u32> = self
            .signals
            .iter()
            .filter(|s| s.is_multiplex)
            .map(|s| s.multiplexed_group_idx)
            .collect();
        indexes.sort_unstable();
        indexes.dedup();
        indexes
    }

    /// The lowest declared mux group index, treated as the start of a batch.
    pub fn start_mux_group_index(&self) -> Option<u32> {
        self.mux_group_indexes().first().copied()
    }

    /// Signals of one mux group, in declaration order.
    pub fn signals_in_group(&self, group_idx: u32) -> impl Iterator<Item = &Signal> {
        self.signals
            .iter()
            .filter(move |s| s.is_multiplex && s.multiplexed_group_idx == group_idx)
    }
}

/// Top-level parse result of one DBC file.
///
/// Built once by `Parser::parse` and immutable afterwards; the generators
/// only read it. Messages are kept in declaration order and duplicates are
/// not merged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Database {
    /// Free text from the `VERSION` line.
    pub version: String,
    /// Node names from `BU_`, in declaration order.
    pub nodes: Vec<String>,
    /// Messages from `BO_`, in declaration order.
    pub messages: Vec<Message>,
}

impl Database {
    /// First declared message with the given CAN id.
    pub fn message_by_id(&self, id: u32) -> Option<&Message> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// First declared message with the given name.
    pub fn message_by_name(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.name == name)
    }

    pub(crate) fn message_by_id_mut(&mut self, id: u32) -> Option<&mut Message> {
        self.messages.iter_mut().find(|m| m.id == id)
    }
}
