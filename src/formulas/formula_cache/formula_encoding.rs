use crate::formulas::{EncodedFormula, FormulaType};

const INDEX_ENCODING_SHIFT: u8 = 4;
const TYPE_ENCODE_MASK: u64 = 0b0000_1111;

const ENCODING_TRUE: u64 = 0x01;
const ENCODING_FALSE: u64 = 0x02;
const ENCODING_LIT: u64 = 0x03;
const ENCODING_AND: u64 = 0x04;
const ENCODING_OR: u64 = 0x05;
const ENCODING_NOT: u64 = 0x06;
const ENCODING_IMPL: u64 = 0x07;
const ENCODING_EQUIV: u64 = 0x08;

/// Packed representation of a formula: the lower four bits hold the type,
/// the remaining bits the index into the cache of that type.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct FormulaEncoding {
    pub encoding: u64,
}

impl FormulaEncoding {
    pub const fn encode(index: u64, ty: FormulaType) -> Self {
        let header = match ty {
            FormulaType::True => ENCODING_TRUE,
            FormulaType::False => ENCODING_FALSE,
            FormulaType::Lit => ENCODING_LIT,
            FormulaType::And => ENCODING_AND,
            FormulaType::Or => ENCODING_OR,
            FormulaType::Not => ENCODING_NOT,
            FormulaType::Impl => ENCODING_IMPL,
            FormulaType::Equiv => ENCODING_EQUIV,
        };
        Self { encoding: header | (index << INDEX_ENCODING_SHIFT) }
    }

    pub const fn encode_type(ty: FormulaType) -> Self {
        Self::encode(0, ty)
    }

    pub const fn index(self) -> u64 {
        self.encoding >> INDEX_ENCODING_SHIFT
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn slot(self) -> usize {
        self.index() as usize
    }

    pub const fn formula_type(self) -> FormulaType {
        match self.encoding & TYPE_ENCODE_MASK {
            ENCODING_TRUE => FormulaType::True,
            ENCODING_FALSE => FormulaType::False,
            ENCODING_LIT => FormulaType::Lit,
            ENCODING_AND => FormulaType::And,
            ENCODING_OR => FormulaType::Or,
            ENCODING_NOT => FormulaType::Not,
            ENCODING_IMPL => FormulaType::Impl,
            _ => FormulaType::Equiv,
        }
    }

    pub const fn to_formula(self) -> EncodedFormula {
        EncodedFormula { encoding: self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_keeps_type_and_index() {
        let types = [
            FormulaType::True,
            FormulaType::False,
            FormulaType::Lit,
            FormulaType::And,
            FormulaType::Or,
            FormulaType::Not,
            FormulaType::Impl,
            FormulaType::Equiv,
        ];
        for ty in types {
            for index in [0, 1, 15, 16, 4711, u64::from(u32::MAX)] {
                let enc = FormulaEncoding::encode(index, ty);
                assert_eq!(enc.formula_type(), ty);
                assert_eq!(enc.index(), index);
            }
        }
    }

    #[test]
    fn test_constants_have_index_zero() {
        assert_eq!(FormulaEncoding::encode_type(FormulaType::True).index(), 0);
        assert_ne!(FormulaEncoding::encode_type(FormulaType::True), FormulaEncoding::encode_type(FormulaType::False));
    }
}
