use hexclash_battle::hex::Hex;
use hexclash_battle::limits::{MAX_MOVE_INSTANCES, MAX_SKILL_SLOTS};
use hexclash_battle::types::*;

use crate::error::GameError;
use crate::loadout::SkillUpdate;
use crate::tests::*;

#[test]
fn test_assign_appends_fresh_instance() {
    let (mut session, friendly, _) = create_skirmish();
    let instance = session
        .try_assign_skill(friendly, &SkillDefId::new("heavy-punch"))
        .unwrap();

    assert_eq!(skill_ids(&session, friendly), vec![INNATE_SKILL_ID, "heavy-punch"]);
    let skill = &session.character(friendly).unwrap().skills[1];
    assert_eq!(skill.instance_id, instance);
    assert_ne!(instance, instance_at(&session, friendly, 0));
    assert_eq!(skill.cooldown, 2);
}

#[test]
fn test_faction_exclusivity() {
    let (mut session, first, enemy) = create_skirmish();
    let second = session
        .try_add_character_at_position(Faction::Friendly, Hex::new(1, 2))
        .unwrap();
    let mend = SkillDefId::new("mend");

    assert!(session.assign_skill_to_character(first, &mend));
    let before = session.character(second).unwrap().clone();
    assert_eq!(
        session.try_assign_skill(second, &mend),
        Err(GameError::FactionExclusive)
    );
    assert_eq!(session.character(second).unwrap(), &before);

    let holders = session
        .state()
        .characters
        .iter()
        .filter(|c| c.faction == Faction::Friendly && c.holds_skill(&mend))
        .count();
    assert_eq!(holders, 1);

    assert!(
        session.assign_skill_to_character(enemy, &mend),
        "the other faction may hold it too"
    );
}

#[test]
fn test_removing_skill_frees_it_for_faction() {
    let (mut session, first, _) = create_skirmish();
    let second = session
        .try_add_character_at_position(Faction::Friendly, Hex::new(1, 2))
        .unwrap();
    let volley = SkillDefId::new("volley");

    let instance = session.try_assign_skill(first, &volley).unwrap();
    assert!(session.remove_skill_from_character(first, instance));
    assert!(session.assign_skill_to_character(second, &volley));
}

#[test]
fn test_assign_rejections() {
    let (mut session, friendly, _) = create_skirmish();
    let punch = SkillDefId::new("light-punch");

    assert!(session.assign_skill_to_character(friendly, &punch));
    assert_eq!(
        session.try_assign_skill(friendly, &punch),
        Err(GameError::AlreadyEquipped)
    );
    assert_eq!(
        session.try_assign_skill(friendly, &SkillDefId::new(INNATE_SKILL_ID)),
        Err(GameError::InnateSkill)
    );
    assert_eq!(
        session.try_assign_skill(friendly, &SkillDefId::new("fireball")),
        Err(GameError::UnknownCatalogSkill)
    );
    assert_eq!(
        session.try_assign_skill(CharacterId(77), &punch),
        Err(GameError::UnknownCharacter { id: 77 })
    );
}

#[test]
fn test_slot_cap() {
    let mut session = create_session();
    let mut skills = vec![];
    let innate = session.catalog().innate().unwrap().instantiate(SkillInstanceId(1));
    skills.push(innate);
    for n in 0..(MAX_SKILL_SLOTS as u32 - 1) {
        skills.push(filler_skill(n));
    }
    let full = Character::new(CharacterId(1), "Full", Faction::Friendly, Hex::new(0, 2), 100).with_skills(skills);
    session.init_battle(vec![full]);

    assert_eq!(
        session.try_assign_skill(CharacterId(1), &SkillDefId::new("light-punch")),
        Err(GameError::SlotsFull)
    );
    assert_eq!(
        session.try_duplicate_skill(CharacterId(1), SkillInstanceId(1)),
        Err(GameError::SlotsFull)
    );
}

#[test]
fn test_duplicate_move_up_to_limit() {
    let (mut session, friendly, _) = create_skirmish();
    let source = instance_at(&session, friendly, 0);

    for _ in 1..MAX_MOVE_INSTANCES {
        assert!(session.duplicate_skill(friendly, source));
    }
    assert_eq!(
        session.try_duplicate_skill(friendly, source),
        Err(GameError::MoveLimitReached)
    );
    assert_eq!(session.character(friendly).unwrap().innate_count(), MAX_MOVE_INSTANCES);
}

#[test]
fn test_duplicate_lands_below_source_and_is_independent() {
    let (mut session, friendly, _) = create_skirmish();
    session.assign_skill_to_character(friendly, &SkillDefId::new("light-punch"));
    let source = instance_at(&session, friendly, 0);

    let copy = session.try_duplicate_skill(friendly, source).unwrap();
    assert_eq!(instance_at(&session, friendly, 1), copy);
    assert_eq!(
        skill_ids(&session, friendly),
        vec![INNATE_SKILL_ID, INNATE_SKILL_ID, "light-punch"]
    );

    let update = SkillUpdate {
        mode: Some(MovementMode::Away),
        triggers: Some(vec![Trigger::HpBelow(25)]),
        ..Default::default()
    };
    assert!(session.update_skill(friendly, copy, update));

    let skills = &session.character(friendly).unwrap().skills;
    assert_eq!(skills[0].effect, SkillEffect::Movement { mode: MovementMode::Towards });
    assert!(skills[0].triggers.is_empty());
    assert_eq!(skills[1].effect, SkillEffect::Movement { mode: MovementMode::Away });
    assert_eq!(skills[1].triggers, vec![Trigger::HpBelow(25)]);
}

#[test]
fn test_only_move_duplicates() {
    let (mut session, friendly, _) = create_skirmish();
    let punch = session
        .try_assign_skill(friendly, &SkillDefId::new("light-punch"))
        .unwrap();
    assert_eq!(
        session.try_duplicate_skill(friendly, punch),
        Err(GameError::NotDuplicable)
    );
}

#[test]
fn test_last_move_cannot_be_removed() {
    let (mut session, friendly, _) = create_skirmish();
    let source = instance_at(&session, friendly, 0);

    assert_eq!(
        session.try_remove_skill(friendly, source),
        Err(GameError::InnateSkillRequired)
    );

    let copy = session.try_duplicate_skill(friendly, source).unwrap();
    assert!(session.remove_skill_from_character(friendly, source));
    assert_eq!(instance_at(&session, friendly, 0), copy);
    assert!(!session.remove_skill_from_character(friendly, copy));
    assert!(!session.remove_skill_from_character(friendly, SkillInstanceId(999)));
}

#[test]
fn test_reorder_skills() {
    let (mut session, friendly, _) = create_skirmish();
    session.assign_skill_to_character(friendly, &SkillDefId::new("light-punch"));
    session.assign_skill_to_character(friendly, &SkillDefId::new("mend"));

    assert!(session.move_skill_up(friendly, 2));
    assert_eq!(skill_ids(&session, friendly), vec![INNATE_SKILL_ID, "mend", "light-punch"]);

    assert!(session.move_skill_down(friendly, 0));
    assert_eq!(skill_ids(&session, friendly), vec!["mend", INNATE_SKILL_ID, "light-punch"]);

    assert_eq!(
        session.try_move_skill_up(friendly, 0),
        Err(GameError::InvalidSkillIndex { index: 0 })
    );
    assert_eq!(
        session.try_move_skill_down(friendly, 2),
        Err(GameError::InvalidSkillIndex { index: 2 })
    );
    assert!(!session.move_skill_up(friendly, 7));
}

#[test]
fn test_update_skill_fields() {
    let (mut session, friendly, _) = create_skirmish();
    let punch = session
        .try_assign_skill(friendly, &SkillDefId::new("light-punch"))
        .unwrap();

    let update = SkillUpdate {
        enabled: Some(false),
        selector_override: Some(Some(Selector::new(TargetCategory::Enemy, Strategy::LowestHp))),
        target_filter: Some(Some(TargetFilter::HpBelow(50))),
        ..Default::default()
    };
    assert!(session.update_skill(friendly, punch, update));
    let skill = session.character(friendly).unwrap().skill(punch).unwrap().clone();
    assert!(!skill.enabled);
    assert_eq!(skill.selector().strategy, Strategy::LowestHp);
    assert_eq!(skill.target_filter, Some(TargetFilter::HpBelow(50)));

    let clear = SkillUpdate {
        selector_override: Some(None),
        ..Default::default()
    };
    assert!(session.update_skill(friendly, punch, clear));
    let skill = session.character(friendly).unwrap().skill(punch).unwrap();
    assert_eq!(skill.selector(), Selector::nearest_enemy());
    assert!(!skill.enabled, "untouched fields are kept");
}

#[test]
fn test_update_skill_rejections() {
    let (mut session, friendly, _) = create_skirmish();
    let movement = instance_at(&session, friendly, 0);
    let punch = session
        .try_assign_skill(friendly, &SkillDefId::new("light-punch"))
        .unwrap();
    let before = session.character(friendly).unwrap().clone();

    let self_move = SkillUpdate {
        selector_override: Some(Some(Selector::self_target())),
        ..Default::default()
    };
    assert_eq!(
        session.try_update_skill(friendly, movement, self_move),
        Err(GameError::InvalidSelector)
    );

    let mode_on_attack = SkillUpdate {
        mode: Some(MovementMode::Hold),
        enabled: Some(false),
        ..Default::default()
    };
    assert_eq!(
        session.try_update_skill(friendly, punch, mode_on_attack),
        Err(GameError::NotMovementSkill)
    );
    assert_eq!(session.character(friendly).unwrap(), &before);

    assert_eq!(
        session.try_update_skill(friendly, SkillInstanceId(555), SkillUpdate::default()),
        Err(GameError::UnknownSkillInstance { instance_id: 555 })
    );
}

#[test]
fn test_skill_edits_refresh_reset_snapshot() {
    let (mut session, friendly, _) = create_skirmish();
    session.assign_skill_to_character(friendly, &SkillDefId::new("heavy-punch"));
    session.advance();
    session.advance();
    session.reset();

    assert_eq!(skill_ids(&session, friendly), vec![INNATE_SKILL_ID, "heavy-punch"]);
    assert!(session
        .character(friendly)
        .unwrap()
        .skills
        .iter()
        .all(|s| s.cooldown_remaining == 0));
}

#[test]
fn test_game_error_serde_shape() {
    let json = serde_json::to_string(&GameError::InvalidSkillIndex { index: 3 }).unwrap();
    assert_eq!(json, r#"{"type":"invalidSkillIndex","index":3}"#);
}
