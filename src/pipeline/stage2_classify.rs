use crate::error::{AlterationError, Result};
use crate::model::matrix::ProfileValues;
use crate::model::profile::GeneticProfileKind;

/// GISTIC homozygous calls: deep deletion and high-level amplification.
const ALTERED_CALLS: [i64; 2] = [-2, 2];
const NULL_VALUE: &str = "NaN";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Alteration {
    pub copy_number: bool,
    pub mutated: bool,
}

impl Alteration {
    pub fn both(self) -> bool {
        self.copy_number && self.mutated
    }
}

pub fn is_copy_number_altered(values: &ProfileValues) -> Result<bool> {
    let Some(raw) = values.get(GeneticProfileKind::CopyNumber) else {
        return Ok(false);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NULL_VALUE {
        return Ok(false);
    }
    match trimmed.parse::<i64>() {
        Ok(call) => Ok(ALTERED_CALLS.contains(&call)),
        // Integers past i64 are still integers, just never a homozygous call.
        Err(_) if is_integer_text(trimmed) => Ok(false),
        Err(_) => Err(AlterationError::MalformedValue {
            kind: GeneticProfileKind::CopyNumber,
            value: raw.to_string(),
        }),
    }
}

fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_mutated(values: &ProfileValues) -> bool {
    let Some(raw) = values.get(GeneticProfileKind::Mutation) else {
        return false;
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NULL_VALUE {
        return false;
    }
    // Numeric zero is the portal's "no mutation" sentinel.
    !matches!(trimmed.parse::<f64>(), Ok(v) if v == 0.0)
}

/// Both predicates, evaluated independently. A gene absent from the case is unaltered.
pub fn classify(values: Option<&ProfileValues>) -> Result<Alteration> {
    let Some(values) = values else {
        return Ok(Alteration::default());
    };
    Ok(Alteration {
        copy_number: is_copy_number_altered(values)?,
        mutated: is_mutated(values),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_classify.rs"]
mod tests;
