/// Combat tunables read by the attack resolver.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Standard deviation of the per-attack damage sample.
    pub damage_std_dev: f64,
    /// Multiplier for a ranged attack in a ranged round.
    pub ranged_vs_ranged_multiplier: f64,
    /// Multiplier for a ranged attack in a melee round.
    pub ranged_in_melee_multiplier: f64,
    /// Crit chance lost when attacking at range in a melee round.
    pub ranged_in_melee_crit_penalty: i32,
    /// Upper bound (inclusive) of the crit roll; the lower bound is 0.
    pub crit_roll_max: u32,
}

impl CombatConfig {
    pub const DEFAULT_DAMAGE_STD_DEV: f64 = 5.0;
    pub const DEFAULT_RANGED_VS_RANGED_MULTIPLIER: f64 = 0.80;
    pub const DEFAULT_RANGED_IN_MELEE_MULTIPLIER: f64 = 1.05;
    pub const DEFAULT_RANGED_IN_MELEE_CRIT_PENALTY: i32 = 5;
    pub const DEFAULT_CRIT_ROLL_MAX: u32 = 100;

    pub const fn new() -> Self {
        Self {
            damage_std_dev: Self::DEFAULT_DAMAGE_STD_DEV,
            ranged_vs_ranged_multiplier: Self::DEFAULT_RANGED_VS_RANGED_MULTIPLIER,
            ranged_in_melee_multiplier: Self::DEFAULT_RANGED_IN_MELEE_MULTIPLIER,
            ranged_in_melee_crit_penalty: Self::DEFAULT_RANGED_IN_MELEE_CRIT_PENALTY,
            crit_roll_max: Self::DEFAULT_CRIT_ROLL_MAX,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
