//! Whole-game scenarios driven through the public API with a recording panel.

use pretty_assertions::assert_eq;
use simon::{Game, ScoreDisplay, SequenceGenerator, Signal, SignalSink, Timings, TurnPhase, ValidationPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    On(Signal),
    Off(Signal),
    Score(u32),
    GameOver(u32),
}

#[derive(Debug, Default)]
struct Log {
    events: Vec<Event>,
}

impl SignalSink for Log {
    fn activate(&mut self, signal: Signal) {
        self.events.push(Event::On(signal));
    }

    fn deactivate(&mut self, signal: Signal) {
        self.events.push(Event::Off(signal));
    }
}

impl ScoreDisplay for Log {
    fn show_score(&mut self, score: u32) {
        self.events.push(Event::Score(score));
    }

    fn game_over(&mut self, score: u32) {
        self.events.push(Event::GameOver(score));
    }
}

fn new_game(policy: ValidationPolicy, seed: u64) -> Game<Log, Log> {
    Game::new(Log::default(), Log::default(), Timings::default(), policy, SequenceGenerator::from_seed(seed))
}

/// Advances in 16ms frames, the way the shell drives the game.
fn run_until(game: &mut Game<Log, Log>, phase: TurnPhase) {
    let mut now = game.now();
    for _ in 0..100_000 {
        if game.phase() == phase {
            return;
        }
        now += 16;
        game.tick(now);
    }
    panic!("never reached {:?}", phase);
}

fn other(signal: Signal) -> Signal {
    Signal::ALL[(signal.index() + 2) % Signal::ALL.len()]
}

#[test]
fn first_round_scenario() {
    let mut game = new_game(ValidationPolicy::Strict, 11);
    game.start_game();

    assert_eq!(game.sequence().len(), 1);
    let x = game.sequence()[0];

    run_until(&mut game, TurnPhase::AwaitingInput);
    assert_eq!(game.sink().events, vec![Event::On(x), Event::Off(x)]);

    game.submit(x);
    assert_eq!(game.score(), 1);
    assert_eq!(game.sequence().len(), 2);
    assert_eq!(game.display().events, vec![Event::Score(0), Event::Score(1)]);
}

#[test]
fn perfect_operator_climbs_one_step_per_round() {
    let mut game = new_game(ValidationPolicy::Strict, 12);
    game.start_game();

    let mut previous: Vec<Signal> = Vec::new();
    for round in 1..=8u32 {
        run_until(&mut game, TurnPhase::AwaitingInput);
        assert!(game.input().is_empty());

        let sequence = game.sequence().to_vec();
        assert_eq!(sequence.len(), round as usize);
        assert_eq!(&sequence[..previous.len()], &previous[..]);

        for signal in sequence.iter() {
            assert!(game.input().len() < sequence.len());
            game.submit(*signal);
        }

        assert_eq!(game.score(), round);
        previous = sequence;
    }

    let scores: Vec<Event> = game.display().events.clone();
    assert_eq!(scores, (0..=8).map(Event::Score).collect::<Vec<_>>());
}

#[test]
fn playback_activates_every_signal_in_order() {
    let mut game = new_game(ValidationPolicy::LengthOnly, 13);
    game.start_game();

    for _ in 0..3 {
        run_until(&mut game, TurnPhase::AwaitingInput);
        for _ in 0..game.sequence().len() {
            game.submit(Signal::Red);
        }
    }

    run_until(&mut game, TurnPhase::AwaitingInput);
    let sequence = game.sequence().to_vec();
    assert_eq!(sequence.len(), 4);

    let on: Vec<Signal> = game
        .sink()
        .events
        .iter()
        .filter_map(|event| match event {
            Event::On(signal) => Some(*signal),
            _ => None,
        })
        .collect();

    // The last four activations are the latest playback
    assert_eq!(on[on.len() - 4..].to_vec(), sequence);
}

#[test]
fn reset_silences_stale_callbacks() {
    let mut game = new_game(ValidationPolicy::Strict, 14);
    game.start_game();
    game.tick(1200);
    assert_eq!(game.phase(), TurnPhase::Playing);

    game.reset();
    let events = game.sink().events.len();
    let session = game.session().clone();

    game.tick(10_000);
    game.tick(100_000);

    assert_eq!(game.sink().events.len(), events);
    assert_eq!(game.session(), &session);
    assert_eq!(game.phase(), TurnPhase::Idle);
}

#[test]
fn reset_during_inter_round_pause() {
    let mut game = new_game(ValidationPolicy::Strict, 15);
    game.start_game();
    run_until(&mut game, TurnPhase::AwaitingInput);
    game.submit(game.sequence()[0]);
    assert!(game.next_deadline().is_some());

    game.reset();
    assert_eq!(game.next_deadline(), None);

    game.tick(game.now() + 5_000);
    assert_eq!(game.phase(), TurnPhase::Idle);
    assert!(game.sequence().is_empty());
}

#[test]
fn strict_and_length_only_disagree_on_wrong_answers() {
    let mut strict = new_game(ValidationPolicy::Strict, 16);
    let mut lenient = new_game(ValidationPolicy::LengthOnly, 16);

    for game in vec![&mut strict, &mut lenient] {
        game.start_game();
        run_until(game, TurnPhase::AwaitingInput);
        let wrong = other(game.sequence()[0]);
        game.submit(wrong);
    }

    assert_eq!(strict.phase(), TurnPhase::Lost);
    assert_eq!(strict.score(), 0);
    assert_eq!(strict.display().events.last(), Some(&Event::GameOver(0)));

    assert_eq!(lenient.phase(), TurnPhase::Idle);
    assert_eq!(lenient.score(), 1);
    assert_eq!(lenient.sequence().len(), 2);
}

#[test]
fn score_never_decreases() {
    let mut game = new_game(ValidationPolicy::Strict, 17);
    game.start_game();

    let mut last = 0;
    for round in 0..5 {
        run_until(&mut game, TurnPhase::AwaitingInput);
        let sequence = game.sequence().to_vec();

        if round == 4 {
            game.submit(other(sequence[0]));
        } else {
            for signal in sequence {
                game.submit(signal);
            }
        }

        assert!(game.score() >= last);
        last = game.score();
    }

    assert_eq!(game.phase(), TurnPhase::Lost);
    assert_eq!(game.score(), 4);
}
