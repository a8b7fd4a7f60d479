use alloc::string::{String, ToString};
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::hex::Hex;

/// Discrete unit of simulated time
pub type Tick = u32;

/// Catalog id of the innate movement skill every character carries
pub const INNATE_SKILL_ID: &str = "move-towards";

/// Unique, immutable identifier of a character
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CharacterId(pub u32);

/// Catalog identity of a skill; repeats across equipped copies
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SkillDefId(pub String);

impl SkillDefId {
    pub fn new(id: &str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillDefId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Identity of one equipped copy of a skill; all mutation targets this
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SkillInstanceId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Faction {
    Friendly,
    Enemy,
}

impl Faction {
    pub fn opponent(self) -> Self {
        match self {
            Faction::Friendly => Faction::Enemy,
            Faction::Enemy => Faction::Friendly,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Faction::Friendly => "Friendly",
            Faction::Enemy => "Enemy",
        }
    }
}

// ==========================================
// SELECTORS
// ==========================================

/// Who a selector draws candidates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetCategory {
    Enemy,
    Ally,
    #[serde(rename = "self")]
    SelfUnit,
}

/// How a selector ranks candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Nearest,
    Furthest,
    LowestHp,
    HighestHp,
    /// Candidate with the most of the evaluator's enemies within
    /// `NEARBY_RADIUS` of it
    MostEnemiesNearby,
}

/// How a skill picks its target: category x strategy
///
/// Serialized as the flat selector name (`nearest_enemy`, `self`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(from = "FlatSelector", into = "FlatSelector")]
pub struct Selector {
    pub category: TargetCategory,
    pub strategy: Strategy,
}

impl Selector {
    /// Build a selector; `self` ignores its strategy and is normalized to
    /// `Nearest`.
    pub fn new(category: TargetCategory, strategy: Strategy) -> Self {
        let strategy = match category {
            TargetCategory::SelfUnit => Strategy::Nearest,
            _ => strategy,
        };
        Self { category, strategy }
    }

    pub fn nearest_enemy() -> Self {
        Self::new(TargetCategory::Enemy, Strategy::Nearest)
    }

    pub fn self_target() -> Self {
        Self::new(TargetCategory::SelfUnit, Strategy::Nearest)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::nearest_enemy()
    }
}

/// Persisted form of a `Selector`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlatSelector {
    NearestEnemy,
    FurthestEnemy,
    LowestHpEnemy,
    HighestHpEnemy,
    MostEnemiesNearbyEnemy,
    NearestAlly,
    FurthestAlly,
    LowestHpAlly,
    HighestHpAlly,
    MostEnemiesNearbyAlly,
    #[serde(rename = "self")]
    SelfTarget,
}

impl From<FlatSelector> for Selector {
    fn from(flat: FlatSelector) -> Self {
        use FlatSelector::*;
        let (category, strategy) = match flat {
            NearestEnemy => (TargetCategory::Enemy, Strategy::Nearest),
            FurthestEnemy => (TargetCategory::Enemy, Strategy::Furthest),
            LowestHpEnemy => (TargetCategory::Enemy, Strategy::LowestHp),
            HighestHpEnemy => (TargetCategory::Enemy, Strategy::HighestHp),
            MostEnemiesNearbyEnemy => (TargetCategory::Enemy, Strategy::MostEnemiesNearby),
            NearestAlly => (TargetCategory::Ally, Strategy::Nearest),
            FurthestAlly => (TargetCategory::Ally, Strategy::Furthest),
            LowestHpAlly => (TargetCategory::Ally, Strategy::LowestHp),
            HighestHpAlly => (TargetCategory::Ally, Strategy::HighestHp),
            MostEnemiesNearbyAlly => (TargetCategory::Ally, Strategy::MostEnemiesNearby),
            SelfTarget => (TargetCategory::SelfUnit, Strategy::Nearest),
        };
        Selector::new(category, strategy)
    }
}

impl From<Selector> for FlatSelector {
    fn from(selector: Selector) -> Self {
        use FlatSelector::*;
        match (selector.category, selector.strategy) {
            (TargetCategory::SelfUnit, _) => SelfTarget,
            (TargetCategory::Enemy, Strategy::Nearest) => NearestEnemy,
            (TargetCategory::Enemy, Strategy::Furthest) => FurthestEnemy,
            (TargetCategory::Enemy, Strategy::LowestHp) => LowestHpEnemy,
            (TargetCategory::Enemy, Strategy::HighestHp) => HighestHpEnemy,
            (TargetCategory::Enemy, Strategy::MostEnemiesNearby) => MostEnemiesNearbyEnemy,
            (TargetCategory::Ally, Strategy::Nearest) => NearestAlly,
            (TargetCategory::Ally, Strategy::Furthest) => FurthestAlly,
            (TargetCategory::Ally, Strategy::LowestHp) => LowestHpAlly,
            (TargetCategory::Ally, Strategy::HighestHp) => HighestHpAlly,
            (TargetCategory::Ally, Strategy::MostEnemiesNearby) => MostEnemiesNearbyAlly,
        }
    }
}

/// Candidate pre-filter applied before ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum TargetFilter {
    /// Candidate hp is at most this percentage of its max hp
    HpBelow(u32),
}

impl TargetFilter {
    pub fn matches(&self, candidate: &Character) -> bool {
        match self {
            TargetFilter::HpBelow(percent) => candidate.hp_at_most_percent(*percent),
        }
    }
}

// ==========================================
// SKILLS
// ==========================================

/// Precondition clause; a skill's clauses are combined with AND
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Trigger {
    Always,
    /// Some living enemy is within this many hexes
    EnemyInRange(u32),
    /// Some living ally (not self) is within this many hexes
    AllyInRange(u32),
    /// Own hp is at most this percentage of max hp
    HpBelow(u32),
    /// Some enemy's committed action is locked onto our current cell
    MyCellTargetedByEnemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovementMode {
    Towards,
    Away,
    /// Stay put; a movement skill in this mode never fires
    Hold,
}

/// The single effect payload a skill carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SkillEffect {
    Damage { amount: i32 },
    Healing { amount: i32 },
    Movement { mode: MovementMode },
}

impl SkillEffect {
    pub fn action_type(&self) -> ActionType {
        match self {
            SkillEffect::Damage { .. } => ActionType::Attack,
            SkillEffect::Healing { .. } => ActionType::Heal,
            SkillEffect::Movement { .. } => ActionType::Move,
        }
    }
}

/// An equipped copy of a catalog skill
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: SkillDefId,
    pub instance_id: SkillInstanceId,
    pub name: String,
    /// Ticks from commit to resolution, at least 1
    pub tick_cost: u32,
    pub range: u32,
    pub effect: SkillEffect,
    pub enabled: bool,
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector_override: Option<Selector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_filter: Option<TargetFilter>,
    #[serde(default)]
    pub cooldown: u32,
    #[serde(default)]
    pub cooldown_remaining: u32,
}

impl Skill {
    pub fn new(
        id: &str,
        instance_id: SkillInstanceId,
        name: &str,
        tick_cost: u32,
        range: u32,
        effect: SkillEffect,
    ) -> Self {
        Self {
            id: SkillDefId::new(id),
            instance_id,
            name: name.to_string(),
            tick_cost: tick_cost.max(1),
            range,
            effect,
            enabled: true,
            triggers: Vec::new(),
            selector_override: None,
            target_filter: None,
            cooldown: 0,
            cooldown_remaining: 0,
        }
    }

    pub fn with_triggers(mut self, triggers: Vec<Trigger>) -> Self {
        self.triggers = triggers;
        self
    }

    pub fn with_selector(mut self, selector: Selector) -> Self {
        self.selector_override = Some(selector);
        self
    }

    pub fn with_target_filter(mut self, filter: TargetFilter) -> Self {
        self.target_filter = Some(filter);
        self
    }

    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Effective selector (override, or nearest enemy)
    pub fn selector(&self) -> Selector {
        self.selector_override.unwrap_or_default()
    }

    pub fn is_innate(&self) -> bool {
        self.id.as_str() == INNATE_SKILL_ID
    }

    pub fn is_movement(&self) -> bool {
        matches!(self.effect, SkillEffect::Movement { .. })
    }

    pub fn is_on_cooldown(&self) -> bool {
        self.cooldown_remaining > 0
    }
}

/// Static catalog record a `Skill` is instantiated from
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillDefinition {
    pub id: SkillDefId,
    pub name: String,
    pub tick_cost: u32,
    pub range: u32,
    pub effect: SkillEffect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_selector: Option<Selector>,
    #[serde(default)]
    pub default_triggers: Vec<Trigger>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target_filter: Option<TargetFilter>,
    #[serde(default)]
    pub cooldown: u32,
    #[serde(default)]
    pub innate: bool,
}

impl SkillDefinition {
    /// Equip a fresh copy of this definition
    pub fn instantiate(&self, instance_id: SkillInstanceId) -> Skill {
        Skill {
            id: self.id.clone(),
            instance_id,
            name: self.name.clone(),
            tick_cost: self.tick_cost.max(1),
            range: self.range,
            effect: self.effect,
            enabled: true,
            triggers: self.default_triggers.clone(),
            selector_override: self.default_selector,
            target_filter: self.default_target_filter,
            cooldown: self.cooldown,
            cooldown_remaining: 0,
        }
    }
}

// ==========================================
// CHARACTERS & ACTIONS
// ==========================================

/// A combatant on the board
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub faction: Faction,
    pub position: Hex,
    /// Current hp; at or below zero means dead
    pub hp: i32,
    pub max_hp: i32,
    /// 1-based display slot, never used by game logic
    pub slot_position: u32,
    /// Priority order, index 0 first
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub current_action: Option<Action>,
}

impl Character {
    pub fn new(id: CharacterId, name: &str, faction: Faction, position: Hex, max_hp: i32) -> Self {
        Self {
            id,
            name: name.to_string(),
            faction,
            position,
            hp: max_hp,
            max_hp,
            slot_position: 0,
            skills: Vec::new(),
            current_action: None,
        }
    }

    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = hp;
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// `hp <= percent% of max_hp`, in integer arithmetic
    pub fn hp_at_most_percent(&self, percent: u32) -> bool {
        (self.hp as i64) * 100 <= (self.max_hp as i64) * (percent as i64)
    }

    pub fn skill_index(&self, instance_id: SkillInstanceId) -> Option<usize> {
        self.skills.iter().position(|s| s.instance_id == instance_id)
    }

    pub fn skill(&self, instance_id: SkillInstanceId) -> Option<&Skill> {
        self.skills.iter().find(|s| s.instance_id == instance_id)
    }

    pub fn skill_mut(&mut self, instance_id: SkillInstanceId) -> Option<&mut Skill> {
        self.skills.iter_mut().find(|s| s.instance_id == instance_id)
    }

    pub fn holds_skill(&self, id: &SkillDefId) -> bool {
        self.skills.iter().any(|s| &s.id == id)
    }

    /// Number of innate move instances equipped
    pub fn innate_count(&self) -> usize {
        self.skills.iter().filter(|s| s.is_innate()).count()
    }
}

/// Copy of a target taken when an action is committed
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetSnapshot {
    pub id: CharacterId,
    pub name: String,
    pub faction: Faction,
    pub position: Hex,
    pub hp: i32,
    pub max_hp: i32,
}

impl From<&Character> for TargetSnapshot {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            faction: character.faction,
            position: character.position,
            hp: character.hp,
            max_hp: character.max_hp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionType {
    Attack,
    Move,
    Heal,
    Idle,
}

/// A committed action a character is "in" until it resolves
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, TypeInfo, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub action_type: ActionType,
    pub skill: Skill,
    /// Locked at decision time, never recomputed
    pub target_cell: Hex,
    /// Present only for character-targeted effects (heal)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_character: Option<TargetSnapshot>,
    /// Character the selector picked when the action was decided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<CharacterId>,
    pub started_at_tick: Tick,
    pub resolves_at_tick: Tick,
}

impl Action {
    /// Ticks until resolution, or `None` once the action is past due
    pub fn ticks_remaining(&self, tick: Tick) -> Option<u32> {
        self.resolves_at_tick.checked_sub(tick)
    }

    pub fn matures_by(&self, tick: Tick) -> bool {
        self.resolves_at_tick <= tick
    }
}
