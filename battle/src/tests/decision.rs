use crate::decision::*;
use crate::hex::Hex;
use crate::tests::*;
use crate::types::*;

fn decided(character: &Character, roster: &[Character]) -> DecidedAction {
    decide(character, roster).action().cloned().expect("expected a decision")
}

#[test]
fn test_first_passing_skill_wins() {
    let me = fighter(1, Faction::Friendly, 0, 0);
    let roster = vec![me.clone(), enemy(2, 0, -1)];

    let action = decided(&me, &roster);
    assert_eq!(action.skill_index, 0, "heavy punch has priority");
    assert_eq!(action.action_type, ActionType::Attack);
    assert_eq!(action.target_cell, Hex::new(0, -1));
    assert_eq!(action.focus, CharacterId(2));
    assert!(action.target.is_none(), "attacks are cell-targeted");
}

#[test]
fn test_disabled_skill_is_skipped() {
    let mut me = fighter(1, Faction::Friendly, 0, 0);
    me.skills[0].enabled = false;
    let roster = vec![me.clone(), enemy(2, 0, -1)];

    assert_eq!(decided(&me, &roster).skill.id.as_str(), "light-punch");
    assert_eq!(
        evaluate_skill(0, &me.skills[0], &me, &roster),
        Err(SkillRejection::Disabled)
    );
}

#[test]
fn test_skill_on_cooldown_is_skipped() {
    let mut me = fighter(1, Faction::Friendly, 0, 0);
    me.skills[0].cooldown_remaining = 1;
    let roster = vec![me.clone(), enemy(2, 0, -1)];

    assert_eq!(decided(&me, &roster).skill_index, 1);
    assert_eq!(
        evaluate_skill(0, &me.skills[0], &me, &roster),
        Err(SkillRejection::OnCooldown)
    );
}

#[test]
fn test_failed_trigger_is_skipped() {
    let me = create_character(1, Faction::Friendly, 0, 0).with_skills(vec![
        punch(11).with_triggers(vec![Trigger::Always, Trigger::HpBelow(50)]),
        move_towards(12),
    ]);
    let roster = vec![me.clone(), enemy(2, 0, -3)];

    assert_eq!(
        evaluate_skill(0, &me.skills[0], &me, &roster),
        Err(SkillRejection::TriggerFailed { index: 1 })
    );
    assert_eq!(decided(&me, &roster).action_type, ActionType::Move);
}

#[test]
fn test_out_of_range_falls_through_to_move() {
    let me = fighter(1, Faction::Friendly, 0, 2);
    let roster = vec![me.clone(), enemy(2, 0, -2)];

    assert_eq!(
        evaluate_skill(0, &me.skills[0], &me, &roster),
        Err(SkillRejection::OutOfRange)
    );
    let action = decided(&me, &roster);
    assert_eq!(action.action_type, ActionType::Move);
    assert_eq!(action.target_cell, Hex::new(0, 1));
    assert_eq!(action.focus, CharacterId(2));
}

#[test]
fn test_no_target_means_idle() {
    let me = fighter(1, Faction::Friendly, 0, 0);
    let roster = vec![me.clone(), friendly(2, 1, 0)];

    assert_eq!(decide(&me, &roster), Decision::Idle);
    assert_eq!(
        evaluate_skill(2, &me.skills[2], &me, &roster),
        Err(SkillRejection::NoTarget)
    );
}

#[test]
fn test_dead_character_is_idle() {
    let me = fighter(1, Faction::Friendly, 0, 0).with_hp(0);
    let roster = vec![me.clone(), enemy(2, 0, -1)];
    assert!(decide(&me, &roster).is_idle());
}

#[test]
fn test_character_without_skills_is_idle() {
    let me = friendly(1, 0, 0);
    assert!(decide(&me, &[me.clone(), enemy(2, 0, -1)]).is_idle());
}

#[test]
fn test_move_step_tie_goes_to_reading_order() {
    let me = create_character(1, Faction::Friendly, 1, 0).with_skills(vec![move_towards(11)]);
    let roster = vec![me.clone(), enemy(2, 0, -2)];

    // (1,-1) and (0,0) both close the gap to 2; the lower row wins
    assert_eq!(decided(&me, &roster).target_cell, Hex::new(1, -1));

    let blocked = vec![me.clone(), enemy(2, 0, -2), friendly(3, 1, -1)];
    assert_eq!(decided(&me, &blocked).target_cell, Hex::new(0, 0));
}

#[test]
fn test_dead_bodies_do_not_block_steps() {
    let me = create_character(1, Faction::Friendly, 1, 0).with_skills(vec![move_towards(11)]);
    let roster = vec![me.clone(), enemy(2, 0, -2), friendly(3, 1, -1).with_hp(0)];
    assert_eq!(decided(&me, &roster).target_cell, Hex::new(1, -1));
}

#[test]
fn test_adjacent_move_towards_holds() {
    let me = create_character(1, Faction::Friendly, 0, 0).with_skills(vec![move_towards(11)]);
    let roster = vec![me.clone(), enemy(2, 0, -1)];

    assert_eq!(
        evaluate_skill(0, &me.skills[0], &me, &roster),
        Err(SkillRejection::HoldPosition)
    );
    assert!(decide(&me, &roster).is_idle());
}

#[test]
fn test_hold_mode_never_fires() {
    let hold = Skill::new(
        "guard",
        SkillInstanceId(11),
        "Guard",
        1,
        0,
        SkillEffect::Movement {
            mode: MovementMode::Hold,
        },
    );
    let me = create_character(1, Faction::Friendly, 0, 2).with_skills(vec![hold]);
    let roster = vec![me.clone(), enemy(2, 0, -2)];

    assert_eq!(
        evaluate_skill(0, &me.skills[0], &me, &roster),
        Err(SkillRejection::HoldPosition)
    );
}

#[test]
fn test_movement_never_targets_self() {
    let me = create_character(1, Faction::Friendly, 0, 0).with_skills(vec![
        retreat(11).with_selector(Selector::self_target()),
        move_towards(12),
    ]);
    let roster = vec![me.clone(), enemy(2, 0, -3)];

    assert_eq!(
        evaluate_skill(0, &me.skills[0], &me, &roster),
        Err(SkillRejection::InvalidSelector)
    );
    let action = decided(&me, &roster);
    assert_eq!(action.skill_index, 1, "falls through to the next skill");
    assert_eq!(action.target_cell, Hex::new(0, -1));
}

#[test]
fn test_retreat_steps_away_when_hurt() {
    let me = create_character(1, Faction::Friendly, 0, 1)
        .with_hp(20)
        .with_skills(vec![
            retreat(11).with_triggers(vec![Trigger::HpBelow(30), Trigger::EnemyInRange(2)]),
            punch(12),
        ]);
    let roster = vec![me.clone(), enemy(2, 0, 0)];

    let action = decided(&me, &roster);
    assert_eq!(action.action_type, ActionType::Move);
    assert_eq!(me.position.distance(&Hex::new(0, 0)), 1);
    assert_eq!(action.target_cell.distance(&Hex::new(0, 0)), 2);
    assert_eq!(action.target_cell, Hex::new(1, 1));

    let healthy = me.clone().with_hp(100);
    let roster = vec![healthy.clone(), enemy(2, 0, 0)];
    assert_eq!(decided(&healthy, &roster).action_type, ActionType::Attack);
}

#[test]
fn test_heal_carries_target_snapshot() {
    let healer = create_character(1, Faction::Friendly, 0, 2).with_skills(vec![mend(11)]);
    let hurt = friendly(2, 2, 1).with_hp(30);
    let roster = vec![healer.clone(), hurt.clone(), friendly(3, 0, 3).with_hp(60), enemy(4, 0, -4)];

    let action = decided(&healer, &roster);
    assert_eq!(action.action_type, ActionType::Heal);
    let target = action.target.expect("heals snapshot their target");
    assert_eq!(target.id, hurt.id);
    assert_eq!(target.hp, 30);
    assert_eq!(action.target_cell, hurt.position);
}

#[test]
fn test_target_filter_rejects_healthy_allies() {
    let healer = create_character(1, Faction::Friendly, 0, 2)
        .with_skills(vec![mend(11).with_target_filter(TargetFilter::HpBelow(75))]);
    let roster = vec![healer.clone(), friendly(2, 1, 2).with_hp(80), enemy(3, 0, -4)];

    assert_eq!(
        evaluate_skill(0, &healer.skills[0], &healer, &roster),
        Err(SkillRejection::NoTarget)
    );
}

#[test]
fn test_decide_is_pure() {
    let me = fighter(1, Faction::Friendly, 0, 2);
    let roster = vec![me.clone(), enemy(2, 0, -2)];
    let first = decide(&me, &roster);
    for _ in 0..5 {
        assert_eq!(decide(&me, &roster), first);
    }
}
