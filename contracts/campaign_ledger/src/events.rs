//! # Events
//!
//! Records published for off-chain observers. Each event carries a short
//! symbol as its first topic and the acting address as the second:
//!
//! | Topic 0      | Topic 1       | Data                 |
//! |--------------|---------------|----------------------|
//! | `contrib`    | contributor   | [`ContributionMade`] |
//! | `claimed`    | owner         | [`FundsClaimed`]     |
//! | `withdrawn`  | contributor   | [`WithdrawClaimed`]  |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionMade {
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsClaimed {
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawClaimed {
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_contribution_made(env: &Env, contributor: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("contrib"), contributor.clone()),
        ContributionMade {
            contributor,
            amount,
        },
    );
}

pub fn emit_funds_claimed(env: &Env, owner: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("claimed"), owner.clone()),
        FundsClaimed { owner, amount },
    );
}

pub fn emit_withdraw_claimed(env: &Env, contributor: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("withdrawn"), contributor.clone()),
        WithdrawClaimed {
            contributor,
            amount,
        },
    );
}
