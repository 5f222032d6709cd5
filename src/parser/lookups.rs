use std::collections::HashMap;

use lazy_static::lazy_static;

/// Operator priority levels, lowest first. Derived ordering is the priority.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum BindingPower {
    Assignment,
    Ternary,
    LogicalOr,
    LogicalXor,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Unary,
}

impl BindingPower {
    /// Integer priority; higher binds tighter.
    pub fn level(&self) -> u8 {
        *self as u8
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Positions in which an operator may appear.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    Both,
}

impl Fixity {
    pub fn allows_prefix(&self) -> bool {
        matches!(self, Fixity::Prefix | Fixity::Both)
    }

    pub fn allows_infix(&self) -> bool {
        matches!(self, Fixity::Infix | Fixity::Both)
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct OperatorInfo {
    pub binding_power: BindingPower,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

impl OperatorInfo {
    pub fn infix(binding_power: BindingPower) -> Self {
        OperatorInfo {
            binding_power,
            associativity: Associativity::Left,
            fixity: Fixity::Infix,
        }
    }

    pub fn prefix() -> Self {
        OperatorInfo {
            binding_power: BindingPower::Unary,
            associativity: Associativity::Left,
            fixity: Fixity::Prefix,
        }
    }

    pub fn both(binding_power: BindingPower) -> Self {
        OperatorInfo {
            fixity: Fixity::Both,
            ..OperatorInfo::infix(binding_power)
        }
    }

    pub fn right(self) -> Self {
        OperatorInfo {
            associativity: Associativity::Right,
            ..self
        }
    }
}

/// Mapping from operator symbol to its binding information.
///
/// Symbols absent from the table are rejected in expression position.
#[derive(Debug, Clone, PartialEq)]
pub struct PrecedenceTable {
    operators: HashMap<String, OperatorInfo>,
}

impl PrecedenceTable {
    pub fn empty() -> Self {
        PrecedenceTable {
            operators: HashMap::new(),
        }
    }

    pub fn insert(&mut self, symbol: impl Into<String>, info: OperatorInfo) {
        self.operators.insert(symbol.into(), info);
    }

    pub fn with(mut self, symbol: impl Into<String>, info: OperatorInfo) -> Self {
        self.insert(symbol, info);
        self
    }

    pub fn get(&self, symbol: &str) -> Option<&OperatorInfo> {
        self.operators.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl Default for PrecedenceTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

lazy_static! {
    pub static ref DEFAULT_TABLE: PrecedenceTable = create_default_table();
}

fn create_default_table() -> PrecedenceTable {
    let mut table = PrecedenceTable::empty();

    // Assignment
    for symbol in ["=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>="] {
        table.insert(symbol, OperatorInfo::infix(BindingPower::Assignment));
    }

    table.insert("?", OperatorInfo::infix(BindingPower::Ternary));

    // Logical
    table.insert("||", OperatorInfo::infix(BindingPower::LogicalOr));
    table.insert("^^", OperatorInfo::infix(BindingPower::LogicalXor));
    table.insert("&&", OperatorInfo::infix(BindingPower::LogicalAnd));

    // Bitwise, `&` doubles as address-of
    table.insert("|", OperatorInfo::infix(BindingPower::BitwiseOr));
    table.insert("^", OperatorInfo::infix(BindingPower::BitwiseXor));
    table.insert("&", OperatorInfo::both(BindingPower::BitwiseAnd));

    // Equality and relational
    table.insert("==", OperatorInfo::infix(BindingPower::Equality));
    table.insert("!=", OperatorInfo::infix(BindingPower::Equality));
    for symbol in ["<", ">", "<=", ">="] {
        table.insert(symbol, OperatorInfo::infix(BindingPower::Relational));
    }

    table.insert("<<", OperatorInfo::infix(BindingPower::Shift));
    table.insert(">>", OperatorInfo::infix(BindingPower::Shift));

    // Additive and multiplicative
    table.insert("+", OperatorInfo::both(BindingPower::Additive));
    table.insert("-", OperatorInfo::both(BindingPower::Additive));
    table.insert("*", OperatorInfo::both(BindingPower::Multiplicative));
    table.insert("/", OperatorInfo::both(BindingPower::Multiplicative));
    table.insert("%", OperatorInfo::both(BindingPower::Multiplicative));

    // Prefix only
    for symbol in ["!", "~", "++", "--"] {
        table.insert(symbol, OperatorInfo::prefix());
    }

    table
}
