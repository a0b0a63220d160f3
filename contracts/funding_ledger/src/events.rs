use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionAccepted {
    pub contributor: Address,
    pub amount: i128,
    /// Fiat value the admission check saw, at 18-decimal precision.
    pub fiat_value: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceWithdrawn {
    pub owner: Address,
    pub amount: i128,
    /// Number of history entries cleared by this withdrawal.
    pub entries_cleared: u32,
}

pub fn emit_contribution_accepted(env: &Env, contributor: Address, amount: i128, fiat_value: i128) {
    let topics = (symbol_short!("contrib"), contributor.clone());
    let data = ContributionAccepted {
        contributor,
        amount,
        fiat_value,
    };
    env.events().publish(topics, data);
}

pub fn emit_balance_withdrawn(env: &Env, owner: Address, amount: i128, entries_cleared: u32) {
    let topics = (symbol_short!("withdrawn"), owner.clone());
    let data = BalanceWithdrawn {
        owner,
        amount,
        entries_cleared,
    };
    env.events().publish(topics, data);
}
