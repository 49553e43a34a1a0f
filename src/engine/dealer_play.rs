//! Автоигра дилера и сравнение рук игрока с рукой дилера.

use crate::domain::dealer::Dealer;
use crate::domain::deck::Deck;
use crate::domain::hand::{HandSelector, HandStatus, BLACKJACK};
use crate::domain::player::Player;
use crate::engine::config::EngineConfig;
use crate::engine::hand_history::{RoundEventKind, RoundHistory};

/// Должен ли дилер брать ещё карту.
pub fn dealer_should_draw(dealer: &Dealer, config: &EngineConfig) -> bool {
    let value = dealer.hand_value();
    if value < config.dealer_stands_on {
        return true;
    }
    value == config.dealer_stands_on && config.dealer_hits_soft_17 && dealer.is_soft()
}

/// Дилер добирает по правилам стола. Если колода кончилась – играет тем, что есть.
pub fn play_dealer_hand(
    deck: &mut Deck,
    dealer: &mut Dealer,
    config: &EngineConfig,
    history: &mut RoundHistory,
) {
    while dealer_should_draw(dealer, config) {
        let Ok(card) = deck.deal() else {
            log::warn!(
                "deck exhausted during dealer play, dealer stays on {}",
                dealer.hand_value()
            );
            break;
        };
        dealer.add_card(card);
        log::debug!("dealer drew {card}, value {}", dealer.hand_value());
        history.push(RoundEventKind::DealerDrew {
            card,
            value: dealer.hand_value(),
        });
    }
}

/// Сравнить одну руку игрока с дилером и выставить статусы обеим сторонам.
///
/// Перебор игрока проигрывает всегда, даже если дилер тоже перебрал.
pub fn settle_hand(
    player: &mut Player,
    dealer: &mut Dealer,
    selector: HandSelector,
    history: &mut RoundHistory,
) {
    let player_value = player.hand_value(selector);
    let dealer_value = dealer.hand_value();

    let status = if player_value > BLACKJACK {
        HandStatus::Busted
    } else if dealer_value > BLACKJACK || player_value > dealer_value {
        HandStatus::Won
    } else if player_value < dealer_value {
        HandStatus::Lost
    } else {
        HandStatus::Tied
    };

    player.set_status(selector, status);
    dealer.set_track_status(selector, status.mirrored());

    log::info!(
        "{selector:?} hand settled: player {player_value} vs dealer {dealer_value} -> {status}"
    );
    history.push(RoundEventKind::HandSettled {
        hand: selector,
        player_value,
        dealer_value,
        status,
    });
}

/// Сравнить все руки, которые стоят в `resolved`.
pub fn settle_resolved(player: &mut Player, dealer: &mut Dealer, history: &mut RoundHistory) {
    for selector in [HandSelector::Main, HandSelector::Split] {
        if player.status(selector) == Some(HandStatus::Resolved) {
            settle_hand(player, dealer, selector, history);
        }
    }
}
