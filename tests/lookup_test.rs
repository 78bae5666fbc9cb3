//! Integration tests for key-based lookups and the silent fallbacks.

use rstest::rstest;

use patternbook::behavioural::chain::{discount_for, DiscountChain};
use patternbook::behavioural::state::{MusicPlayer, PlayerState};
use patternbook::behavioural::strategy::strategy_for;
use patternbook::creational::abstract_factory::Theme;
use patternbook::creational::factory_method::AnimalFactory;
use patternbook::{Catalog, PatternError};

#[rstest]
#[case("dog", "Woof!")]
#[case("cat", "Meow!")]
fn given_known_animal_key_when_creating_then_builds_animal(#[case] key: &str, #[case] sound: &str) {
    let animal = AnimalFactory::with_defaults().create(key).unwrap();
    assert_eq!(animal.sound(), sound);
}

#[rstest]
#[case("")]
#[case("Dog")]
#[case("parrot")]
fn given_unrecognized_animal_key_when_creating_then_errors(#[case] key: &str) {
    let result = AnimalFactory::with_defaults().create(key);
    assert!(matches!(result, Err(PatternError::UnknownCategory { .. })));
}

#[test]
fn given_unrecognized_keys_when_looking_up_then_every_registry_errors() {
    assert!("amiga".parse::<Theme>().is_err());
    assert!(strategy_for("bogo").is_err());
    assert!(Catalog::new().find("flyweight").is_err());
}

#[test]
fn given_stopped_player_when_pausing_or_stopping_then_no_state_change() {
    let mut player = MusicPlayer::new();

    assert!(!player.pause().changed());
    assert!(!player.stop().changed());
    assert_eq!(player.state(), PlayerState::Stopped);
}

#[test]
fn given_player_when_cycling_then_only_defined_states_are_visited() {
    let mut player = MusicPlayer::new();
    let visited: Vec<PlayerState> = vec![
        player.play().to,
        player.play().to,
        player.pause().to,
        player.pause().to,
        player.stop().to,
    ];
    assert_eq!(
        visited,
        vec![
            PlayerState::Playing,
            PlayerState::Playing,
            PlayerState::Paused,
            PlayerState::Paused,
            PlayerState::Stopped,
        ]
    );
}

#[test]
fn given_purchase_below_every_tier_when_discounting_then_returns_zero() {
    let chain = DiscountChain::from_tiers(&patternbook::Settings::default().discount.tiers);
    assert_eq!(discount_for(&chain, 99.99), 0.0);
}
