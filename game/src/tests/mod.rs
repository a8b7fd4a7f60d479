mod loadout;

use hexclash_battle::hex::Hex;
use hexclash_battle::types::*;

use crate::session::GameSession;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn create_session() -> GameSession {
    GameSession::new(hexclash_assets::build_skill_catalog())
}

/// Session with one friendly at (0,2) and one enemy at (0,-2)
fn create_skirmish() -> (GameSession, CharacterId, CharacterId) {
    let mut session = create_session();
    let friendly = session
        .try_add_character_at_position(Faction::Friendly, Hex::new(0, 2))
        .unwrap();
    let enemy = session
        .try_add_character_at_position(Faction::Enemy, Hex::new(0, -2))
        .unwrap();
    (session, friendly, enemy)
}

fn skill_ids(session: &GameSession, id: CharacterId) -> Vec<&str> {
    session
        .character(id)
        .unwrap()
        .skills
        .iter()
        .map(|s| s.id.as_str())
        .collect()
}

fn instance_at(session: &GameSession, id: CharacterId, index: usize) -> SkillInstanceId {
    session.character(id).unwrap().skills[index].instance_id
}

fn filler_skill(n: u32) -> Skill {
    Skill::new(
        &format!("filler-{n}"),
        SkillInstanceId(1000 + n),
        "Filler",
        1,
        1,
        SkillEffect::Damage { amount: 1 },
    )
}
