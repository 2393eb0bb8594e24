//! Tests for the social-network layer.

use crate::ingest::Command;
use crate::social::SocialNetwork;

#[test]
fn test_add_user() {
    let network = SocialNetwork::new();
    assert!(network.add_user("ana"));
    assert!(!network.add_user("ana")); // duplicate
    assert!(!network.add_user("")); // empty name
    assert_eq!(network.all_users(), vec!["ana"]);
}

#[test]
fn test_add_friends_is_symmetric() {
    let network = SocialNetwork::new();
    assert!(network.add_friends("ana", "bora"));
    assert_eq!(network.friends("ana"), vec!["bora"]);
    assert_eq!(network.friends("bora"), vec!["ana"]);
}

#[test]
fn test_add_friends_creates_absent_users() {
    let network = SocialNetwork::new();
    assert!(network.add_friends("ana", "bora"));
    let mut users = network.all_users();
    users.sort_unstable();
    assert_eq!(users, vec!["ana", "bora"]);
}

#[test]
fn test_add_friends_rejects_self_and_empty() {
    let network = SocialNetwork::new();
    assert!(!network.add_friends("ana", "ana"));
    assert!(!network.add_friends("", "bora"));
    assert!(!network.add_friends("ana", ""));
    assert!(network.all_users().is_empty());
}

#[test]
fn test_add_friends_twice_fails() {
    let network = SocialNetwork::new();
    assert!(network.add_friends("ana", "bora"));
    assert!(!network.add_friends("ana", "bora"));
    assert!(!network.add_friends("bora", "ana"));
}

#[test]
fn test_friends_of_unknown_user_is_empty() {
    let network = SocialNetwork::new();
    assert!(network.friends("nobody").is_empty());
}

#[test]
fn test_unfriend() {
    let network = SocialNetwork::new();
    network.add_friends("ana", "bora");
    assert!(network.unfriend("ana", "bora"));
    assert!(network.friends("ana").is_empty());
    assert!(network.friends("bora").is_empty());
    // users survive the unfriending
    assert_eq!(network.all_users().len(), 2);
}

#[test]
fn test_unfriend_non_friends_fails() {
    let network = SocialNetwork::new();
    network.add_user("ana");
    network.add_user("bora");
    assert!(!network.unfriend("ana", "bora"));
}

#[test]
fn test_unfriend_on_empty_network_creates_nothing() {
    let network = SocialNetwork::new();
    assert!(!network.unfriend("p", "q"));
    assert!(network.all_users().is_empty());
}

#[test]
fn test_suggestions() {
    let network = SocialNetwork::new();
    network.add_friends("ana", "bora");
    network.add_friends("bora", "ciril");
    network.add_friends("bora", "dunja");
    network.add_friends("ana", "dunja");

    // ciril is a friend of a friend; dunja is already a direct friend.
    assert_eq!(network.suggestions("ana"), vec!["ciril"]);
}

#[test]
fn test_suggestions_exclude_self() {
    let network = SocialNetwork::new();
    network.add_friends("ana", "bora");
    // ana's only friend-of-friend is ana herself
    assert!(network.suggestions("ana").is_empty());
}

#[test]
fn test_suggestions_for_unknown_user_is_empty() {
    let network = SocialNetwork::new();
    network.add_friends("ana", "bora");
    assert!(network.suggestions("nobody").is_empty());
}

#[test]
fn test_suggestions_are_distinct() {
    let network = SocialNetwork::new();
    network.add_friends("ana", "bora");
    network.add_friends("ana", "ciril");
    network.add_friends("bora", "dunja");
    network.add_friends("ciril", "dunja");

    // dunja is reachable through two friends but suggested once
    assert_eq!(network.suggestions("ana"), vec!["dunja"]);
}

#[test]
fn test_merge_users() {
    let network = SocialNetwork::new();
    network.add_friends("ana", "bora");
    network.add_friends("bora", "ciril");

    assert!(network.merge_users("ana", "bora"));
    let mut users = network.all_users();
    users.sort_unstable();
    assert_eq!(users, vec!["ana", "ciril"]);
    // bora's friendship with ciril carried over to the survivor
    assert_eq!(network.friends("ana"), vec!["ciril"]);
    assert_eq!(network.friends("ciril"), vec!["ana"]);
}

#[test]
fn test_merge_users_requires_relationship() {
    let network = SocialNetwork::new();
    network.add_user("ana");
    network.add_user("bora");
    assert!(!network.merge_users("ana", "bora"));
    assert!(!network.merge_users("", "bora"));
    assert_eq!(network.all_users().len(), 2);
}

#[test]
fn test_apply_commands() {
    let network = SocialNetwork::new();
    assert!(network.apply(&Command::AddUser("ana".to_string())));
    assert!(network.apply(&Command::AddFriends(
        "ana".to_string(),
        "bora".to_string()
    )));
    assert!(!network.apply(&Command::AddUser("ana".to_string())));
    assert_eq!(network.friends("ana"), vec!["bora"]);
}
