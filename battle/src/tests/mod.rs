mod decision;

use crate::hex::Hex;
use crate::rng::{BattleRng, XorShiftRng};
use crate::state::deployment_cells;
use crate::types::*;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn create_character(id: u32, faction: Faction, q: i32, r: i32) -> Character {
    let name = alloc::format!("{} {}", faction.label(), id);
    Character::new(CharacterId(id), &name, faction, Hex::new(q, r), 100)
}

fn friendly(id: u32, q: i32, r: i32) -> Character {
    create_character(id, Faction::Friendly, q, r)
}

fn enemy(id: u32, q: i32, r: i32) -> Character {
    create_character(id, Faction::Enemy, q, r)
}

fn create_attack(instance: u32, name: &str, tick_cost: u32, range: u32, amount: i32) -> Skill {
    Skill::new(
        name,
        SkillInstanceId(instance),
        name,
        tick_cost,
        range,
        SkillEffect::Damage { amount },
    )
}

fn punch(instance: u32) -> Skill {
    create_attack(instance, "light-punch", 1, 1, 10)
}

fn heavy(instance: u32) -> Skill {
    create_attack(instance, "heavy-punch", 2, 2, 25)
}

fn mend(instance: u32) -> Skill {
    Skill::new(
        "mend",
        SkillInstanceId(instance),
        "Mend",
        2,
        5,
        SkillEffect::Healing { amount: 20 },
    )
    .with_selector(Selector::new(TargetCategory::Ally, Strategy::LowestHp))
}

fn move_towards(instance: u32) -> Skill {
    Skill::new(
        INNATE_SKILL_ID,
        SkillInstanceId(instance),
        "Move",
        1,
        0,
        SkillEffect::Movement {
            mode: MovementMode::Towards,
        },
    )
}

fn retreat(instance: u32) -> Skill {
    Skill::new(
        "retreat",
        SkillInstanceId(instance),
        "Retreat",
        1,
        0,
        SkillEffect::Movement {
            mode: MovementMode::Away,
        },
    )
}

/// Committed action on `cell`, started at `tick`
fn action_on(skill: Skill, cell: Hex, tick: Tick) -> Action {
    Action {
        action_type: skill.effect.action_type(),
        resolves_at_tick: tick + skill.tick_cost,
        skill,
        target_cell: cell,
        target_character: None,
        focus: None,
        started_at_tick: tick,
    }
}

/// A fighter with punch, heavy punch and move, in that priority
fn fighter(id: u32, faction: Faction, q: i32, r: i32) -> Character {
    create_character(id, faction, q, r).with_skills(alloc::vec![
        heavy(id * 10 + 1).with_cooldown(2),
        punch(id * 10 + 2),
        move_towards(id * 10 + 3),
    ])
}

/// Roster of fighters (plus one healer per side) on seed-chosen cells
fn random_roster(friendlies: usize, enemies: usize, seed: u64) -> alloc::vec::Vec<Character> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    let mut roster = alloc::vec::Vec::new();
    let mut next_id = 1;
    for (faction, count) in [(Faction::Friendly, friendlies), (Faction::Enemy, enemies)] {
        let mut cells = deployment_cells(faction);
        for n in 0..count {
            let cell = cells.remove(rng.gen_range(cells.len()));
            let mut character = fighter(next_id, faction, cell.q, cell.r);
            if n == 0 {
                character.skills.insert(0, mend(next_id * 10 + 4));
            }
            roster.push(character);
            next_id += 1;
        }
    }
    roster
}
