use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

/// Precedence tiers, loosest first.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum BindingPower {
    Additive,
    Multiplicative,
}

lazy_static! {
    pub static ref BINARY_OPERATORS: HashMap<TokenKind, BindingPower> = {
        let mut map = HashMap::new();
        map.insert(TokenKind::Plus, BindingPower::Additive);
        map.insert(TokenKind::Sub, BindingPower::Additive);
        map.insert(TokenKind::Mult, BindingPower::Multiplicative);
        map.insert(TokenKind::Div, BindingPower::Multiplicative);
        map
    };
}

/// Whether `kind` is a binary operator on the `bp` tier.
pub fn is_operator_of(kind: TokenKind, bp: BindingPower) -> bool {
    BINARY_OPERATORS.get(&kind) == Some(&bp)
}
