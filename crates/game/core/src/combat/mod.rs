//! Combat resolution system.
//!
//! Pure functions for resolving one attack exchange. Randomness is injected
//! through [`crate::rng::CombatRng`]; nothing here prints or logs.
//!
//! # Core Functions
//!
//! - `plan_round`: combine both sides' range choices into one round
//! - `resolve_attack`: reach check, damage sample, range modifier, crit, apply
//! - `on_victory`: announce the win and credit a victorious hero
//! - `effective_crit_threshold` / `check_crit`: crit gating
//! - `sample_damage` / `apply_range_modifier` / `crit_bonus`: damage arithmetic

pub mod crit;
pub mod damage;
pub mod engagement;
pub mod result;

pub use crit::{check_crit, effective_crit_threshold, roll_crit};
pub use damage::{apply_range_modifier, crit_bonus, range_multiplier, sample_damage};
pub use engagement::{RoundPlan, choose_range, negotiate_combat_range, plan_round};
pub use result::{AttackOutcome, AttackResult, on_victory, resolve_attack};
