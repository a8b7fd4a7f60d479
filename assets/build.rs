//! Build script: reads /skills/skills.json and generates Rust source that
//! statically constructs the skill catalog, so the engine never parses JSON
//! at runtime and stays no_std compatible.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

// ── JSON schema types (build-time only) ──────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsonSkill {
    id: String,
    name: String,
    tick_cost: u32,
    range: u32,
    effect: JsonEffect,
    selector: Option<String>,
    #[serde(default)]
    triggers: Vec<JsonTrigger>,
    target_filter: Option<JsonTrigger>,
    #[serde(default)]
    cooldown: u32,
    #[serde(default)]
    innate: bool,
}

#[derive(Deserialize)]
struct JsonEffect {
    #[serde(rename = "type")]
    effect_type: String,
    // damage, healing
    amount: Option<i32>,
    // movement
    mode: Option<String>,
}

#[derive(Deserialize)]
struct JsonTrigger {
    #[serde(rename = "type")]
    trigger_type: String,
    value: Option<u32>,
}

// ── Code generation helpers ──────────────────────────────────────────────────

fn gen_effect(effect: &JsonEffect) -> String {
    match effect.effect_type.as_str() {
        "damage" => {
            let amount = effect.amount.expect("damage effect needs an amount");
            format!("SkillEffect::Damage {{ amount: {amount} }}")
        }
        "healing" => {
            let amount = effect.amount.expect("healing effect needs an amount");
            format!("SkillEffect::Healing {{ amount: {amount} }}")
        }
        "movement" => {
            let mode = match effect.mode.as_deref() {
                Some("towards") => "Towards",
                Some("away") => "Away",
                Some("hold") => "Hold",
                other => panic!("Unknown movement mode: {other:?}"),
            };
            format!("SkillEffect::Movement {{ mode: MovementMode::{mode} }}")
        }
        other => panic!("Unknown effect type: {other}"),
    }
}

fn gen_selector(flat: &str) -> String {
    if flat == "self" {
        return "Selector::self_target()".to_string();
    }
    let (strategy, category) = if let Some(s) = flat.strip_suffix("_enemy") {
        (s, "Enemy")
    } else if let Some(s) = flat.strip_suffix("_ally") {
        (s, "Ally")
    } else {
        panic!("Unknown selector: {flat}");
    };
    let strategy = match strategy {
        "nearest" => "Nearest",
        "furthest" => "Furthest",
        "lowest_hp" => "LowestHp",
        "highest_hp" => "HighestHp",
        "most_enemies_nearby" => "MostEnemiesNearby",
        other => panic!("Unknown selector strategy: {other}"),
    };
    format!("Selector::new(TargetCategory::{category}, Strategy::{strategy})")
}

fn value_of(trigger: &JsonTrigger) -> u32 {
    trigger
        .value
        .unwrap_or_else(|| panic!("{} needs a value", trigger.trigger_type))
}

fn gen_trigger(trigger: &JsonTrigger) -> String {
    match trigger.trigger_type.as_str() {
        "always" => "Trigger::Always".to_string(),
        "enemyInRange" => format!("Trigger::EnemyInRange({})", value_of(trigger)),
        "allyInRange" => format!("Trigger::AllyInRange({})", value_of(trigger)),
        "hpBelow" => format!("Trigger::HpBelow({})", value_of(trigger)),
        "myCellTargetedByEnemy" => "Trigger::MyCellTargetedByEnemy".to_string(),
        other => panic!("Unknown trigger type: {other}"),
    }
}

fn gen_target_filter(filter: &JsonTrigger) -> String {
    match filter.trigger_type.as_str() {
        "hpBelow" => format!("TargetFilter::HpBelow({})", value_of(filter)),
        other => panic!("Unknown target filter: {other}"),
    }
}

fn gen_skill(skill: &JsonSkill) -> String {
    let id = &skill.id;
    let name = &skill.name;
    let tick_cost = skill.tick_cost;
    let range = skill.range;
    let cooldown = skill.cooldown;
    let innate = skill.innate;
    let effect = gen_effect(&skill.effect);
    let selector = match &skill.selector {
        Some(flat) => format!("Some({})", gen_selector(flat)),
        None => "None".to_string(),
    };
    let triggers: Vec<String> = skill.triggers.iter().map(gen_trigger).collect();
    let triggers = format!("vec![{}]", triggers.join(", "));
    let target_filter = match &skill.target_filter {
        Some(filter) => format!("Some({})", gen_target_filter(filter)),
        None => "None".to_string(),
    };

    assert!(tick_cost >= 1, "{id}: tickCost must be at least 1");

    format!(
        r#"        SkillDefinition {{
            id: SkillDefId::new("{id}"),
            name: String::from("{name}"),
            tick_cost: {tick_cost},
            range: {range},
            effect: {effect},
            default_selector: {selector},
            default_triggers: {triggers},
            default_target_filter: {target_filter},
            cooldown: {cooldown},
            innate: {innate},
        }}"#
    )
}

// ── Main ─────────────────────────────────────────────────────────────────────

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let skills_path = Path::new(&manifest_dir).join("../skills/skills.json");

    println!("cargo:rerun-if-changed={}", skills_path.display());

    let skills_json = fs::read_to_string(&skills_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", skills_path.display()));
    let skills: Vec<JsonSkill> =
        serde_json::from_str(&skills_json).expect("Failed to parse skills.json");

    let innate = skills.iter().filter(|s| s.innate).count();
    assert_eq!(innate, 1, "skills.json must define exactly one innate skill");

    let entries: Vec<String> = skills.iter().map(gen_skill).collect();

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("skills_generated.rs");

    let generated = format!(
        r#"// Auto-generated from skills.json, DO NOT EDIT
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use hexclash_battle::catalog::SkillCatalog;
use hexclash_battle::types::*;

/// Returns every skill defined in skills.json, in file order.
pub fn get_all_skills() -> Vec<SkillDefinition> {{
    vec![
{}
    ]
}}

/// Build the catalog lookup from the static skill data.
pub fn build_skill_catalog() -> SkillCatalog {{
    get_all_skills().into_iter().collect()
}}
"#,
        entries.join(",\n"),
    );

    fs::write(&dest, generated).expect("Failed to write generated skills file");
}
