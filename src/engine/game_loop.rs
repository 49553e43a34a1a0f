use crate::domain::card::Card;
use crate::domain::dealer::Dealer;
use crate::domain::deck::Deck;
use crate::domain::hand::{HandSelector, HandStatus, BLACKJACK};
use crate::domain::player::{Player, SplitRefusal};
use crate::domain::round::Round;
use crate::engine::config::EngineConfig;
use crate::engine::dealer_play::{play_dealer_hand, settle_hand, settle_resolved};
use crate::engine::errors::{GameError, PlayerMove};
use crate::engine::hand_history::{RoundEventKind, RoundHistory};
use crate::engine::RandomSource;
use crate::infra::rng::SystemRng;

/// Как команда сообщает о записанной ошибке.
#[derive(Clone, Copy, Debug)]
enum Report {
    /// Пустая строка, ошибка видна только через `inspect error`.
    Silent,
    /// `Error: <message>`.
    Inline,
}

/// Игровая сессия: колода, текущий раунд и последняя ошибка.
///
/// Все операции синхронные и выполняются до конца через `&mut self`.
pub struct BlackjackEngine<R: RandomSource = SystemRng> {
    pub config: EngineConfig,
    /// `None`, пока колоду ни разу не задавали.
    pub deck: Option<Deck>,
    /// `None` до первой успешной раздачи.
    pub round: Option<Round>,
    pub last_error: Option<GameError>,
    /// История текущего раунда.
    pub history: RoundHistory,
    pub(crate) rng: R,
}

impl BlackjackEngine<SystemRng> {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default(), SystemRng)
    }
}

impl Default for BlackjackEngine<SystemRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> BlackjackEngine<R> {
    pub fn with_config(config: EngineConfig, rng: R) -> Self {
        Self {
            config,
            deck: None,
            round: None,
            last_error: None,
            history: RoundHistory::new(),
            rng,
        }
    }

    pub fn with_rng(rng: R) -> Self {
        Self::with_config(EngineConfig::default(), rng)
    }

    pub fn player(&self) -> Option<&Player> {
        self.round.as_ref().map(|r| &r.player)
    }

    pub fn dealer(&self) -> Option<&Dealer> {
        self.round.as_ref().map(|r| &r.dealer)
    }

    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    pub fn last_error(&self) -> Option<&GameError> {
        self.last_error.as_ref()
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    /// Задать колоду: без карт – стандартные 52 перемешанные, иначе ровно эти карты.
    pub fn set_deck(&mut self, cards: Vec<Card>) -> String {
        let deck = self.deck.get_or_insert_with(Deck::default);
        let message = if cards.is_empty() {
            deck.reset(&mut self.rng);
            "Deck set with shuffled cards."
        } else {
            deck.replace(cards);
            "Deck set with provided cards."
        };
        log::debug!("deck set, {} cards", deck.len());
        self.last_error = None;
        message.to_string()
    }

    /// Новая раздача. Переданные карты заменяют колоду.
    pub fn deal(&mut self, cards: Vec<Card>) -> String {
        let result = self.try_deal(cards);
        self.report(result, Report::Silent)
    }

    pub fn hit(&mut self) -> String {
        let result = self.try_hit();
        self.report(result, Report::Silent)
    }

    pub fn stand(&mut self) -> String {
        let result = self.try_stand();
        self.report(result, Report::Inline)
    }

    pub fn split(&mut self) -> String {
        let result = self.try_split();
        self.report(result, Report::Inline)
    }

    pub fn double_down(&mut self) -> String {
        let result = self.try_double_down();
        self.report(result, Report::Inline)
    }

    pub fn inspect_deck(&self) -> String {
        match &self.deck {
            Some(deck) => deck.to_string(),
            None => "Deck: (empty)".to_string(),
        }
    }

    pub fn inspect_player(&self) -> String {
        match &self.round {
            Some(round) => round.player.inspect(),
            None => "Player: (empty)".to_string(),
        }
    }

    pub fn inspect_dealer(&self) -> String {
        match &self.round {
            Some(round) => round.dealer.inspect(round.player.has_split()),
            None => "Dealer: (empty)".to_string(),
        }
    }

    pub fn inspect_error(&self) -> String {
        match &self.last_error {
            Some(err) => format!("Error: {err}"),
            None => String::new(),
        }
    }

    /// Успех сбрасывает последнюю ошибку, ошибка – запоминается.
    fn report(&mut self, result: Result<String, GameError>, report: Report) -> String {
        match result {
            Ok(message) => {
                self.last_error = None;
                message
            }
            Err(err) => {
                log::warn!("command rejected: {err}");
                let message = match report {
                    Report::Silent => String::new(),
                    Report::Inline => format!("Error: {err}"),
                };
                self.last_error = Some(err);
                message
            }
        }
    }

    fn try_deal(&mut self, cards: Vec<Card>) -> Result<String, GameError> {
        if cards.is_empty() && self.deck.as_ref().map_or(true, Deck::is_empty) {
            return Err(GameError::EmptyDeck);
        }
        if !cards.is_empty() {
            self.deck.get_or_insert_with(Deck::default).replace(cards);
        }
        let deck = self.deck.as_mut().ok_or(GameError::EmptyDeck)?;

        // Меньше четырёх карт раздать нельзя при любом конфиге.
        if deck.len() < self.config.min_cards_to_deal.max(4) {
            return Err(GameError::InsufficientCards);
        }

        let mut round = Round::new();
        for _ in 0..2 {
            let card = deck.deal().map_err(|_| GameError::InsufficientCards)?;
            round.player.add_card(card, HandSelector::Main);
            let card = deck.deal().map_err(|_| GameError::InsufficientCards)?;
            round.dealer.add_card(card);
        }

        let player_blackjack = round.player.has_blackjack(HandSelector::Main);
        let dealer_blackjack = round.dealer.has_blackjack();

        let (player_status, dealer_status, message) = match (player_blackjack, dealer_blackjack) {
            (true, true) => (
                HandStatus::Tied,
                HandStatus::Tied,
                "Both player and dealer have Blackjack! It's a tie.",
            ),
            (true, false) => (
                HandStatus::Won,
                HandStatus::Lost,
                "Player has Blackjack! Player wins.",
            ),
            (false, true) => (
                HandStatus::Lost,
                HandStatus::Won,
                "Dealer has Blackjack! Dealer wins.",
            ),
            (false, false) => (
                HandStatus::Playing,
                HandStatus::Waiting,
                "Cards dealt successfully.",
            ),
        };
        round.player.set_status(HandSelector::Main, player_status);
        round.dealer.set_status(dealer_status);

        log::info!(
            "round dealt: player {} ({}), dealer {} ({}), {} cards left",
            round.player.main_hand,
            round.player.hand_value(HandSelector::Main),
            round.dealer.hand,
            round.dealer.hand_value(),
            deck.len()
        );

        self.history = RoundHistory::new();
        self.history.push(RoundEventKind::RoundDealt {
            player: round.player.main_hand.cards.clone(),
            dealer: round.dealer.hand.cards.clone(),
        });
        self.round = Some(round);

        Ok(message.to_string())
    }

    fn try_hit(&mut self) -> Result<String, GameError> {
        let deck = match self.deck.as_mut() {
            Some(deck) if !deck.is_empty() => deck,
            _ => return Err(GameError::DeckExhausted(PlayerMove::Hit)),
        };
        let Round { player, dealer } = self.round.as_mut().ok_or(GameError::GameNotStarted)?;
        let history = &mut self.history;

        // Основная рука перебрала – добор идёт во вторую.
        if player.active() == HandSelector::Main
            && player.has_split()
            && player.status(HandSelector::Main) == Some(HandStatus::Busted)
            && player.status(HandSelector::Split) != Some(HandStatus::Busted)
        {
            player.switch_to_split_hand();
        }
        let active = player.active();

        let card = deck
            .deal()
            .map_err(|_| GameError::DeckExhausted(PlayerMove::Hit))?;
        player.add_card(card, active);
        history.push(RoundEventKind::PlayerDrew { hand: active, card });

        let value = player.hand_value(active);
        log::debug!("player hit {card} on {active:?} hand, value {value}");

        // Перебор не доигрывает раунд: основная рука в `resolved` ждёт следующего `stand`.
        if value > BLACKJACK {
            player.set_status(active, HandStatus::Busted);
            match active {
                HandSelector::Split => dealer.set_split_status(HandStatus::Won),
                HandSelector::Main => {
                    dealer.set_status(HandStatus::Won);
                    if player.has_split() {
                        player.set_status(HandSelector::Split, HandStatus::Playing);
                    } else {
                        dealer.set_split_status(HandStatus::Won);
                    }
                }
            }
            return Ok(player.inspect());
        }

        play_dealer_hand(deck, dealer, &self.config, history);
        let dealer_value = dealer.hand_value();

        if dealer_value > BLACKJACK {
            player.set_status(active, HandStatus::Won);
            dealer.set_both(HandStatus::Busted);
        } else if value == BLACKJACK && dealer_value == BLACKJACK {
            player.set_status(active, HandStatus::Tied);
            dealer.set_both(HandStatus::Tied);
        } else if value == BLACKJACK {
            player.set_status(active, HandStatus::Won);
            dealer.set_both(HandStatus::Lost);
        } else {
            player.set_status(active, HandStatus::Playing);
            // Только дорожка активной руки: итог другой руки уже мог быть выставлен.
            if dealer_value >= self.config.dealer_stands_on {
                dealer.set_track_status(active, HandStatus::Waiting);
            }
        }

        Ok(player.inspect())
    }

    fn try_stand(&mut self) -> Result<String, GameError> {
        let Round { player, dealer } = self.round.as_mut().ok_or(GameError::GameNotStarted)?;
        let history = &mut self.history;

        let active = player.active();
        player.set_status(active, HandStatus::Resolved);
        history.push(RoundEventKind::PlayerStood { hand: active });
        log::debug!("player stands on {active:?} hand");

        if active == HandSelector::Main && player.has_split() {
            player.switch_to_split_hand();
            player.set_status(HandSelector::Split, HandStatus::Playing);
        } else {
            if let Some(deck) = self.deck.as_mut() {
                play_dealer_hand(deck, dealer, &self.config, history);
            }
            settle_resolved(player, dealer, history);
        }

        Ok(player.inspect())
    }

    fn try_split(&mut self) -> Result<String, GameError> {
        let deck = self.deck.as_mut().ok_or(GameError::GameNotStarted)?;
        let Round { player, dealer } = self.round.as_mut().ok_or(GameError::GameNotStarted)?;

        if player.has_split() {
            return Err(GameError::AlreadySplit);
        }
        if !player.can_split() {
            return Err(GameError::CannotSplit);
        }
        if deck.len() < 2 {
            return Err(GameError::InsufficientCardsToSplit);
        }

        player.split()?;
        for selector in [HandSelector::Main, HandSelector::Split] {
            let card = deck
                .deal()
                .map_err(|_| GameError::InsufficientCardsToSplit)?;
            player.add_card(card, selector);
        }

        let main_cards = player.main_hand.cards.clone();
        let split_cards = player
            .split_hand
            .as_ref()
            .map(|h| h.cards.clone())
            .unwrap_or_default();
        log::debug!("hand split into {main_cards:?} and {split_cards:?}");
        self.history.push(RoundEventKind::HandSplit {
            main: main_cards,
            split: split_cards,
        });

        if player.has_blackjack(HandSelector::Main) {
            player.set_status(HandSelector::Main, HandStatus::Won);
            dealer.set_status(HandStatus::Lost);
        } else {
            player.set_status(HandSelector::Main, HandStatus::Playing);
        }

        if player.has_blackjack(HandSelector::Split) {
            player.set_status(HandSelector::Split, HandStatus::Won);
            dealer.set_split_status(HandStatus::Lost);
        } else {
            player.set_status(HandSelector::Split, HandStatus::Waiting);
            dealer.set_split_status(HandStatus::Waiting);
        }

        Ok(player.inspect())
    }

    fn try_double_down(&mut self) -> Result<String, GameError> {
        let deck = match self.deck.as_mut() {
            Some(deck) if !deck.is_empty() => deck,
            _ => return Err(GameError::DeckExhausted(PlayerMove::DoubleDown)),
        };
        let Round { player, dealer } = self.round.as_mut().ok_or(GameError::GameNotStarted)?;
        let history = &mut self.history;

        let active = player.active();
        if player.hand(active).map_or(true, |h| h.len() != 2) {
            return Err(GameError::DoubleDownNotAllowed);
        }

        let card = deck
            .deal()
            .map_err(|_| GameError::DeckExhausted(PlayerMove::DoubleDown))?;
        player.add_card(card, active);
        history.push(RoundEventKind::DoubledDown { hand: active, card });
        log::debug!(
            "player doubled down on {active:?} hand with {card}, value {}",
            player.hand_value(active)
        );

        // Удвоенная рука сравнивается сразу, с текущей рукой дилера.
        player.set_status(active, HandStatus::Resolved);
        settle_hand(player, dealer, active, history);

        if active == HandSelector::Main && player.has_split() {
            player.switch_to_split_hand();
            player.set_status(HandSelector::Split, HandStatus::Playing);
        } else {
            play_dealer_hand(deck, dealer, &self.config, history);
            settle_resolved(player, dealer, history);
        }

        Ok(player.inspect())
    }
}

impl From<SplitRefusal> for GameError {
    fn from(refusal: SplitRefusal) -> Self {
        match refusal {
            SplitRefusal::AlreadySplit => GameError::AlreadySplit,
            SplitRefusal::NotAPair => GameError::CannotSplit,
        }
    }
}
