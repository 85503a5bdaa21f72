use serde_json::{json, Value};
use trainer_name_localizer::{resolve, LookupTables, TrainerRecord, Unresolved};

fn make_tables() -> LookupTables {
    LookupTables::from_json_strs(
        r#"{
            "Swimmer": {"MALE": "スイマー", "FEMALE": "スイマー（女）"},
            "Tuber": {"MALE": "うきわボーイ", "FEMALE": "うきわガール"},
            "Bug Catcher": "むしとりしょうねん",
            "Ace Trainer": {"MALE": "エリートトレーナー", "FEMALE": "エリートトレーナー（女）"},
            "Team": "チーム",
            "Team Leader": "チームリーダー"
        }"#,
        r#"{
            "Rick & Jen": "リックとジェン",
            "Sam": "サム",
            "Alice": "アリス"
        }"#,
    )
    .expect("fixture tables parse")
}

fn make_trainer(value: Value) -> TrainerRecord {
    TrainerRecord::from_value(value).expect("fixture is an object")
}

fn resolve_value(value: Value) -> Result<String, Unresolved> {
    let trainer = make_trainer(value);
    let name = trainer.name().expect("fixture has a name").to_string();
    resolve(&name, &trainer, &make_tables())
}

#[test]
fn glyph_gender_selects_variant() {
    assert_eq!(
        resolve_value(json!({"name": "Swimmer♂ David"})),
        Ok("スイマー David".to_string())
    );
    assert_eq!(
        resolve_value(json!({"name": "Tuber♀ Alice"})),
        Ok("うきわガール アリス".to_string())
    );
}

#[test]
fn plain_title_ignores_gender() {
    assert_eq!(
        resolve_value(json!({"name": "Bug Catcher Rick", "team": [{"gender": "FEMALE"}]})),
        Ok("むしとりしょうねん Rick".to_string())
    );
}

#[test]
fn whole_name_override_beats_title_logic() {
    assert_eq!(
        resolve_value(json!({"name": "Rick & Jen", "team": [{"gender": "MALE"}]})),
        Ok("リックとジェン".to_string())
    );
}

#[test]
fn joined_names_are_substituted_per_segment() {
    assert_eq!(
        resolve_value(json!({"name": "Ace Trainer Sam & Max", "team": [{"gender": "MALE"}]})),
        Ok("エリートトレーナー サム＆Max".to_string())
    );
}

#[test]
fn team_gender_is_used_without_glyph() {
    assert_eq!(
        resolve_value(json!({
            "name": "Ace Trainer Sam",
            "team": [{"species": "eevee"}, {"gender": "FEMALE"}]
        })),
        Ok("エリートトレーナー（女） サム".to_string())
    );
}

#[test]
fn unknown_title_is_unresolved() {
    assert_eq!(
        resolve_value(json!({"name": "Unknown Person Xyz"})),
        Err(Unresolved::TitleNotFound {
            original: "Unknown Person Xyz".to_string()
        })
    );
}

#[test]
fn glyph_gender_beats_team_gender() {
    assert_eq!(
        resolve_value(json!({"name": "Swimmer♀ Jen", "team": [{"gender": "MALE"}]})),
        Ok("スイマー（女） Jen".to_string())
    );
}

#[test]
fn longest_title_prefix_is_selected() {
    assert_eq!(
        resolve_value(json!({"name": "Team Leader Aaron"})),
        Ok("チームリーダー Aaron".to_string())
    );
    assert_eq!(
        resolve_value(json!({"name": "Team Aaron"})),
        Ok("チーム Aaron".to_string())
    );
}

#[test]
fn gendered_title_without_any_gender_is_unresolved() {
    let err = resolve_value(json!({
        "name": "Ace Trainer Sam",
        "team": [{"gender": "GENDERLESS"}, {"level": 50}]
    }))
    .unwrap_err();
    assert!(matches!(err, Unresolved::GenderUnknown { ref title, .. } if title == "Ace Trainer"));
    assert_eq!(err.to_string(), "gender unknown");
}

#[test]
fn resolve_is_idempotent() {
    let tables = make_tables();
    let trainer = make_trainer(json!({"name": "Ace Trainer Sam & Max", "team": [{"gender": "MALE"}]}));
    let first = resolve("Ace Trainer Sam & Max", &trainer, &tables);
    let second = resolve("Ace Trainer Sam & Max", &trainer, &tables);
    assert_eq!(first, second);
    assert_eq!(trainer.name(), Some("Ace Trainer Sam & Max"));
}
