//! Elemental type system and effectiveness chart

/// Elemental types (18 types)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// All 18 elemental types
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Defending types this type deals double damage to
    pub fn super_effective_against(&self) -> &'static [Type] {
        SUPER_EFFECTIVE[*self as usize]
    }

    /// Attacking types this type takes zero damage from when defending
    pub fn immune_to(&self) -> &'static [Type] {
        IMMUNE[*self as usize]
    }

    /// Get type effectiveness against a single defending type.
    ///
    /// Immunity takes absolute priority, then the super-effective listing
    /// (2.0), then its mirror (the defender listing the attacker reads as
    /// resistance, 0.5), otherwise neutral.
    pub fn effectiveness(&self, defender: Type) -> f32 {
        if defender.immune_to().contains(self) {
            return 0.0;
        }
        if self.super_effective_against().contains(&defender) {
            return 2.0;
        }
        if defender.super_effective_against().contains(self) {
            return 0.5;
        }
        1.0
    }

    /// Get type effectiveness against multiple defending types (multiplied)
    pub fn effectiveness_multi(&self, defenders: &[Type]) -> f32 {
        defenders
            .iter()
            .map(|t| self.effectiveness(*t))
            .product()
    }

    /// Parse from a type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(Type::Normal),
            "fire" => Some(Type::Fire),
            "water" => Some(Type::Water),
            "electric" => Some(Type::Electric),
            "grass" => Some(Type::Grass),
            "ice" => Some(Type::Ice),
            "fighting" => Some(Type::Fighting),
            "poison" => Some(Type::Poison),
            "ground" => Some(Type::Ground),
            "flying" => Some(Type::Flying),
            "psychic" => Some(Type::Psychic),
            "bug" => Some(Type::Bug),
            "rock" => Some(Type::Rock),
            "ghost" => Some(Type::Ghost),
            "dragon" => Some(Type::Dragon),
            "dark" => Some(Type::Dark),
            "steel" => Some(Type::Steel),
            "fairy" => Some(Type::Fairy),
            _ => None,
        }
    }

    /// Convert to canonical lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Super-effective relations, indexed by attacking type.
/// Each type deals 2.0x damage to the types listed; the reverse reading
/// of the same table encodes 0.5x resistance, so no separate resistance
/// table exists.
///
/// Order: Normal, Fire, Water, Electric, Grass, Ice, Fighting, Poison, Ground,
///        Flying, Psychic, Bug, Rock, Ghost, Dragon, Dark, Steel, Fairy
#[rustfmt::skip]
static SUPER_EFFECTIVE: [&[Type]; 18] = [
    // Normal attacking
    &[],
    // Fire attacking
    &[Type::Grass, Type::Ice, Type::Bug, Type::Steel],
    // Water attacking
    &[Type::Fire, Type::Ground, Type::Rock],
    // Electric attacking
    &[Type::Water, Type::Flying],
    // Grass attacking
    &[Type::Water, Type::Ground, Type::Rock],
    // Ice attacking
    &[Type::Grass, Type::Ground, Type::Flying, Type::Dragon],
    // Fighting attacking
    &[Type::Normal, Type::Ice, Type::Rock, Type::Dark, Type::Steel],
    // Poison attacking
    &[Type::Grass, Type::Fairy],
    // Ground attacking
    &[Type::Fire, Type::Electric, Type::Poison, Type::Rock, Type::Steel],
    // Flying attacking
    &[Type::Grass, Type::Fighting, Type::Bug],
    // Psychic attacking
    &[Type::Fighting, Type::Poison],
    // Bug attacking
    &[Type::Grass, Type::Psychic, Type::Dark],
    // Rock attacking
    &[Type::Fire, Type::Ice, Type::Flying, Type::Bug],
    // Ghost attacking
    &[Type::Psychic, Type::Ghost],
    // Dragon attacking
    &[Type::Dragon],
    // Dark attacking
    &[Type::Psychic, Type::Ghost],
    // Steel attacking
    &[Type::Ice, Type::Rock, Type::Fairy],
    // Fairy attacking
    &[Type::Fighting, Type::Dragon, Type::Dark],
];

/// Immunities, indexed by defending type.
/// Each type takes 0.0x damage from the attacking types listed; immunity
/// overrides every other relation for that pair.
#[rustfmt::skip]
static IMMUNE: [&[Type]; 18] = [
    // Normal defending
    &[Type::Ghost],
    // Fire defending
    &[],
    // Water defending
    &[],
    // Electric defending
    &[],
    // Grass defending
    &[],
    // Ice defending
    &[],
    // Fighting defending
    &[Type::Ghost],
    // Poison defending
    &[],
    // Ground defending
    &[Type::Electric],
    // Flying defending
    &[Type::Ground],
    // Psychic defending
    &[],
    // Bug defending
    &[],
    // Rock defending
    &[],
    // Ghost defending
    &[Type::Normal, Type::Fighting],
    // Dragon defending
    &[],
    // Dark defending
    &[Type::Psychic],
    // Steel defending
    &[Type::Poison],
    // Fairy defending
    &[],
];
