//! Named-field save states.
//!
//! The host decides how fields are stored. The core only lists every field
//! that must survive a save/restore and validates what comes back. The
//! dispatch table is never saved; it follows the variant. The MMU bank
//! bases are never saved; they follow the selectors.

use serde::{Deserialize, Serialize};

use crate::flags::U;
use crate::{Error, M65xx, Mmu, Status};

/// A saved value with its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    Bool(bool),
    U8(u8),
    U16(u16),
}

impl FieldValue {
    const fn width(self) -> u8 {
        match self {
            FieldValue::Bool(_) => 1,
            FieldValue::U8(_) => 8,
            FieldValue::U16(_) => 16,
        }
    }
}

/// One persisted field: `(component, instance, tag, value)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateField {
    pub component: String,
    pub instance: u32,
    pub tag: String,
    pub value: FieldValue,
}

const BASE_FIELDS: [(&str, u8); 10] = [
    ("PC", 16),
    ("S", 16),
    ("P", 8),
    ("A", 8),
    ("X", 8),
    ("Y", 8),
    ("pending_irq", 1),
    ("after_cli", 1),
    ("nmi_state", 1),
    ("irq_state", 1),
];
const EXTENDED_FIELDS: [(&str, u8); 2] = [("Z", 8), ("B", 8)];
const MMU_FIELDS: [(&str, u8); 2] = [("low", 16), ("high", 16)];

impl M65xx {
    /// Tags and widths this variant persists.
    fn state_layout(&self) -> Vec<(&'static str, u8)> {
        let mut layout = BASE_FIELDS.to_vec();
        if self.variant.has_extended_registers() {
            layout.extend(EXTENDED_FIELDS);
        }
        if self.variant.has_mmu() {
            layout.extend(MMU_FIELDS);
        }
        layout
    }

    fn field_value(&self, tag: &str) -> Option<FieldValue> {
        let value = match tag {
            "PC" => FieldValue::U16(self.regs.pc),
            "S" => FieldValue::U16(self.regs.sp),
            "P" => FieldValue::U8(self.regs.p.0),
            "A" => FieldValue::U8(self.regs.a),
            "X" => FieldValue::U8(self.regs.x),
            "Y" => FieldValue::U8(self.regs.y),
            "Z" => FieldValue::U8(self.regs.z),
            "B" => FieldValue::U8(self.regs.b),
            "pending_irq" => FieldValue::Bool(self.pending_irq),
            "after_cli" => FieldValue::Bool(self.after_cli),
            "nmi_state" => FieldValue::Bool(self.nmi_state),
            "irq_state" => FieldValue::Bool(self.irq_state),
            "low" => FieldValue::U16(self.mmu.low()),
            "high" => FieldValue::U16(self.mmu.high()),
            _ => return None,
        };
        Some(value)
    }

    /// Every field that must survive a save/restore, tagged with this CPU's
    /// component name and instance.
    #[must_use]
    pub fn save_state(&self) -> Vec<StateField> {
        self.state_layout()
            .into_iter()
            .filter_map(|(tag, _)| {
                Some(StateField {
                    component: self.variant.name().to_string(),
                    instance: self.instance(),
                    tag: tag.to_string(),
                    value: self.field_value(tag)?,
                })
            })
            .collect()
    }

    /// Restore fields produced by [`M65xx::save_state`].
    ///
    /// Nothing is changed unless the whole set validates: the component and
    /// instance must match, every expected tag must be present exactly once
    /// with the right width, and no unknown tags may appear.
    ///
    /// Parts without the 65CE02 extensions keep S in page one and bit 5 of P
    /// set, whatever the saved values say.
    pub fn load_state(&mut self, fields: &[StateField]) -> Result<(), Error> {
        let layout = self.state_layout();

        for (index, field) in fields.iter().enumerate() {
            if field.component != self.variant.name() || field.instance != self.instance() {
                return Err(Error::ComponentMismatch {
                    expected: self.variant.name(),
                    expected_instance: self.instance(),
                    found: field.component.clone(),
                    found_instance: field.instance,
                });
            }
            let Some(&(tag, width)) = layout.iter().find(|(tag, _)| *tag == field.tag) else {
                return Err(Error::UnexpectedField(field.tag.clone()));
            };
            if fields[..index].iter().any(|earlier| earlier.tag == field.tag) {
                return Err(Error::DuplicateField(field.tag.clone()));
            }
            if field.value.width() != width {
                return Err(Error::FieldWidth {
                    tag,
                    expected: width,
                });
            }
        }

        let lookup = |tag: &'static str| {
            fields
                .iter()
                .find(|field| field.tag == tag)
                .map(|field| field.value)
                .ok_or(Error::MissingField(tag))
        };
        let mut values = Vec::with_capacity(layout.len());
        for &(tag, _) in &layout {
            values.push((tag, lookup(tag)?));
        }

        let extended = self.variant.has_extended_registers();
        let mut low = self.mmu.low();
        let mut high = self.mmu.high();
        for (tag, value) in values {
            match (tag, value) {
                ("PC", FieldValue::U16(v)) => self.regs.pc = v,
                ("S", FieldValue::U16(v)) if extended => self.regs.sp = v,
                ("S", FieldValue::U16(v)) => self.regs.sp = 0x0100 | (v & 0x00FF),
                ("P", FieldValue::U8(v)) if extended => self.regs.p = Status(v),
                ("P", FieldValue::U8(v)) => self.regs.p = Status(v | U),
                ("A", FieldValue::U8(v)) => self.regs.a = v,
                ("X", FieldValue::U8(v)) => self.regs.x = v,
                ("Y", FieldValue::U8(v)) => self.regs.y = v,
                ("Z", FieldValue::U8(v)) => self.regs.z = v,
                ("B", FieldValue::U8(v)) => self.regs.b = v,
                ("pending_irq", FieldValue::Bool(v)) => self.pending_irq = v,
                ("after_cli", FieldValue::Bool(v)) => self.after_cli = v,
                ("nmi_state", FieldValue::Bool(v)) => self.nmi_state = v,
                ("irq_state", FieldValue::Bool(v)) => self.irq_state = v,
                ("low", FieldValue::U16(v)) => low = v,
                ("high", FieldValue::U16(v)) => high = v,
                _ => {}
            }
        }
        if self.variant.has_mmu() {
            self.mmu = Mmu::from_selectors(low, high);
        }
        self.regs.ppc = self.regs.pc;
        Ok(())
    }
}
