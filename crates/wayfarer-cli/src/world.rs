//! The bundled demo world: a small railway station at night.

use wayfarer_core::{
    Direction, Door, DoorAction, Exit, GameState, Item, ItemAction, ItemId, Location, Npc,
    ReadCondition, Readable, WorldResult,
};

/// Build the station world every subcommand runs against.
///
/// Four locations: the platform, a carriage behind a sliding door, a
/// waiting room, and the stationmaster's office behind a locked oak
/// door whose key lies in the waiting room.
pub fn demo_world() -> WorldResult<GameState> {
    let platform = Location::new(
        "platform",
        "Platform",
        "A wind-swept platform under a sooty glass roof. The night train hisses softly.",
    )
    .with_item(
        Item::new("paper-ticket", "paper ticket")
            .with_alias("ticket")
            .with_alias("pass")
            .with_description("A second-class ticket, slightly crumpled.")
            .with_weight(0.25)
            .with_readable(Readable::new("ADMIT ONE. Carriage 7, seat 43.")),
    )
    .with_item(
        Item::new("luggage-trunk", "luggage trunk")
            .with_alias("trunk")
            .with_description("A brass-cornered trunk somebody abandoned in a hurry.")
            .with_weight(40.0)
            .with_reaction(
                ItemAction::TakeFailed,
                "You strain at the handles until a porter glares at you.",
            ),
    )
    .with_exit(
        Exit::new(Direction::In, "carriage").one_way().with_door(
            Door::new("carriage door")
                .with_alias("door")
                .with_reaction(DoorAction::Open, "The door slides aside with a clatter."),
        ),
    )
    .with_exit(Exit::new(Direction::North, "waiting-room"));

    let carriage = Location::new(
        "carriage",
        "Carriage",
        "Threadbare seats and a lingering smell of coal smoke.",
    )
    .with_item(
        Item::new("thermos", "dented thermos")
            .with_description("Somebody's forgotten thermos, empty but still faintly warm.")
            .with_weight(0.5),
    )
    .with_npc(
        Npc::new("conductor", "conductor")
            .with_description("The conductor studies a pocket watch as if it owed him money."),
    )
    .with_exit(Exit::new(Direction::Out, "platform").one_way());

    let waiting_room = Location::new(
        "waiting-room",
        "Waiting Room",
        "Rows of hard benches below a clock that stopped at ten past three.",
    )
    .with_item(
        Item::new("brass-key", "brass key")
            .with_alias("key")
            .with_description("A heavy brass key stamped STATIONMASTER.")
            .with_weight(0.25),
    )
    .with_item(
        Item::new("tea-flask", "tea flask")
            .with_alias("tea")
            .with_description("Hot, sweet, and stewed to tar.")
            .with_weight(0.5)
            .with_reaction(ItemAction::Use, "You take a scalding sip.")
            .with_reaction(ItemAction::Pour, "Steam curls up as the tea changes vessels."),
    )
    .with_exit(Exit::new(Direction::South, "platform"))
    .with_exit(
        Exit::new(Direction::East, "office").with_door(
            Door::new("oak door")
                .locked_by("brass-key")
                .with_reaction(DoorAction::Unlock, "The lock gives a well-oiled click.")
                .with_reaction(
                    DoorAction::Open,
                    "Warm lamplight spills into the waiting room.",
                ),
        ),
    );

    let office = Location::new(
        "office",
        "Office",
        "Timetables cover every wall of the stationmaster's office.",
    )
    .with_item(
        Item::new("ledger", "stationmaster's ledger")
            .with_description("A heavy book of arrivals and departures.")
            .with_weight(1.5)
            .with_readable(
                Readable::new("Entry 44: the night train arrived empty again.")
                    .with_condition(ReadCondition::HasItem(ItemId::new("ledger")))
                    .with_turn_cost(2)
                    .with_hint("The entries are too cramped to read at arm's length."),
            ),
    )
    .with_npc(
        Npc::new("stationmaster", "stationmaster")
            .with_description("The stationmaster pretends to be busy with a rubber stamp."),
    )
    .with_exit(Exit::new(Direction::West, "waiting-room"));

    let state = GameState::new("platform", vec![platform, carriage, waiting_room, office])?;
    Ok(state.with_capacity(5.0))
}
