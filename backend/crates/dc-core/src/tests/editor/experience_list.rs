use crate::tests::experience;
use crate::{ExperienceList, ExperiencePatch};

use uuid::Uuid;

#[test]
fn given_list_when_inserting_then_new_entry_is_first() {
    let mut list = vec![experience("Eng")];
    let entry = experience("VP");

    list.insert_front(entry.clone());

    assert_eq!(list.len(), 2);
    assert_eq!(list[0], entry);
    assert_eq!(list[1].title, "Eng");
}

#[test]
fn given_existing_id_when_removing_then_exactly_that_entry_is_gone() {
    let eng = experience("Eng");
    let mgr = experience("Mgr");
    let mut list = vec![eng.clone(), mgr.clone()];

    let removed = list.remove_by_id(mgr.id);

    assert_eq!(removed, Some(mgr.clone()));
    assert_eq!(list, vec![eng]);
    assert_eq!(list.position_of(mgr.id), None);
}

#[test]
fn given_absent_id_when_removing_then_list_unchanged() {
    let mut list = vec![experience("Eng"), experience("Mgr")];
    let before = list.clone();

    assert_eq!(list.remove_by_id(Uuid::new_v4()), None);
    assert_eq!(list, before);
}

#[test]
fn given_patch_when_updating_by_id_then_only_match_changes() {
    let eng = experience("Eng");
    let mgr = experience("Mgr");
    let mut list = vec![eng.clone(), mgr.clone()];
    let patch = ExperiencePatch {
        title: Some("Director".to_string()),
        ..ExperiencePatch::default()
    };

    assert!(list.update_by_id(mgr.id, &patch));
    assert_eq!(list[0], eng);
    assert_eq!(list[1].title, "Director");
    assert!(!list.update_by_id(Uuid::new_v4(), &patch));
}
