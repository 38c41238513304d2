//! Turn execution: applying parsed commands to the game state.

use wayfarer_core::{
    CapacityCheck, Direction, DoorAction, DoorState, Exit, GameState, Item, ItemAction, ItemId,
    Location,
};

use crate::error::TurnError;
use crate::fuzzy;
use crate::parser::Command;

/// The outcome of one executed command.
///
/// Execution is total: every command produces a result, never a panic
/// and never an unhandled error. Failures carry the player-facing
/// message of the [`TurnError`] they stem from.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandResult {
    /// Whether the command did what the player asked.
    pub success: bool,
    /// Whether the player asked to end the game.
    pub quit: bool,
    /// The primary message to show.
    pub message: String,
    /// Reaction lines from items and doors, in firing order.
    pub reactions: Vec<String>,
}

impl CommandResult {
    /// A successful turn with a message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            quit: false,
            message: message.into(),
            reactions: Vec::new(),
        }
    }

    /// A failed turn with a free-form message.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            quit: false,
            message: message.into(),
            reactions: Vec::new(),
        }
    }

    /// A failed turn, worded by the error catalogue.
    pub fn failure(error: TurnError) -> Self {
        Self::rejected(error.to_string())
    }

    /// The quit signal.
    pub fn quit() -> Self {
        Self {
            success: true,
            quit: true,
            message: "Goodbye!".to_string(),
            reactions: Vec::new(),
        }
    }

    /// Append a reaction line.
    pub fn with_reaction(mut self, reaction: impl Into<String>) -> Self {
        self.reactions.push(reaction.into());
        self
    }

    /// Append a reaction line if one is configured.
    pub fn with_reaction_opt(self, reaction: Option<&str>) -> Self {
        match reaction {
            Some(text) => self.with_reaction(text),
            None => self,
        }
    }
}

/// Execute one command against the game state.
///
/// Every command except `Quit` and `Unknown` advances the turn counter,
/// whether or not it succeeds; fumbling at a locked door still costs
/// time.
pub fn execute(command: Command, state: &mut GameState) -> CommandResult {
    match &command {
        Command::Quit | Command::Unknown { .. } => {}
        _ => state.advance_turns(1),
    }

    match command {
        Command::Look => CommandResult::success(render_location(state)),
        Command::Examine { target } => do_examine(state, &target),
        Command::Take { item } => do_take(state, &item),
        Command::TakeAll => do_take_all(state),
        Command::Drop { item } => do_drop(state, &item),
        Command::DropAll => do_drop_all(state),
        Command::Use { item } => do_use(state, &item),
        Command::Combine { left, right } => do_combine(state, &left, &right),
        Command::Pour { fluid, container } => do_pour(state, &fluid, &container),
        Command::Go { direction } => do_go(state, direction),
        Command::GoTo { destination } => do_go_to(state, &destination),
        Command::Inventory => do_inventory(state),
        Command::Stats => do_stats(state),
        Command::Open { door } => do_open(state, &door),
        Command::Unlock { door } => do_unlock(state, &door),
        Command::Quit => CommandResult::quit(),
        Command::Unknown { input } => {
            CommandResult::rejected(format!("I don't know how to \"{input}\"."))
        }
    }
}

/// Describe the current location: name, description, NPCs, items, and
/// exits in a fixed direction order.
pub fn render_location(state: &GameState) -> String {
    let location = state.current_location();
    let mut output = location.name().to_string();
    if !location.description().is_empty() {
        output.push('\n');
        output.push_str(location.description());
    }
    for npc in location.npcs() {
        output.push('\n');
        output.push_str(&format!("{} is here.", npc.name));
    }
    for item in location.items() {
        output.push('\n');
        output.push_str(&format!("You see {} here.", item.name));
    }

    let mut exits: Vec<&Exit> = location.exits().values().collect();
    exits.sort_by_key(|exit| exit.direction);
    if !exits.is_empty() {
        let mut parts = Vec::new();
        for exit in &exits {
            parts.push(describe_exit(exit));
        }
        output.push('\n');
        output.push_str(&format!("Exits: {}", parts.join(", ")));
    }
    output
}

fn describe_exit(exit: &Exit) -> String {
    match &exit.door {
        Some(door) => format!("{} ({}, {})", exit.direction, door.name(), door.state()),
        None => exit.direction.to_string(),
    }
}

/// An item in reach: carried items first, then the current location.
fn find_reachable_item<'a>(state: &'a GameState, name: &str) -> Option<&'a Item> {
    fuzzy::resolve(name, state.inventory().items(), state.fuzzy())
        .or_else(|| fuzzy::resolve(name, state.current_location().items(), state.fuzzy()))
}

fn find_location_item(state: &GameState, name: &str) -> Option<ItemId> {
    fuzzy::resolve(name, state.current_location().items(), state.fuzzy()).map(|i| i.id.clone())
}

fn find_inventory_item(state: &GameState, name: &str) -> Option<ItemId> {
    fuzzy::resolve(name, state.inventory().items(), state.fuzzy()).map(|i| i.id.clone())
}

/// The direction of the exit whose door answers to `name`.
fn find_door_exit(state: &GameState, name: &str) -> Option<Direction> {
    fuzzy::resolve(name, state.current_location().exits().values(), state.fuzzy())
        .map(|exit| exit.direction)
}

fn capacity_error(reason: CapacityCheck, name: String) -> TurnError {
    match reason {
        CapacityCheck::TooHeavy => TurnError::ItemTooHeavy(name),
        _ => TurnError::InventoryFull(name),
    }
}

fn do_take(state: &mut GameState, name: &str) -> CommandResult {
    let Some(item_id) = find_location_item(state, name) else {
        return CommandResult::failure(TurnError::ItemNotFound(name.to_string()));
    };
    take_one(state, &item_id)
}

fn take_one(state: &mut GameState, item_id: &ItemId) -> CommandResult {
    let Some(item) = state.current_location().items().iter().find(|i| &i.id == item_id) else {
        return CommandResult::failure(TurnError::ItemNotFound(item_id.to_string()));
    };
    let display = item.name.clone();
    if !item.takeable {
        return CommandResult::failure(TurnError::ItemNotTakeable(display))
            .with_reaction_opt(item.reaction(ItemAction::TakeFailed));
    }
    match state.inventory().check(item) {
        CapacityCheck::Fits => {}
        reason => {
            return CommandResult::failure(capacity_error(reason, display))
                .with_reaction_opt(item.reaction(ItemAction::TakeFailed));
        }
    }

    // Checks passed: hand the item over. The handover itself cannot
    // leave the item in limbo; on a refusal it goes straight back.
    let Some(item) = state.current_location_mut().remove_item(item_id) else {
        return CommandResult::failure(TurnError::ItemNotFound(item_id.to_string()));
    };
    let reaction = item.reaction(ItemAction::Take).map(str::to_string);
    match state.inventory_mut().try_add(item) {
        Ok(()) => CommandResult::success(format!("You take the {display}."))
            .with_reaction_opt(reaction.as_deref()),
        Err(rejected) => {
            let error = capacity_error(rejected.reason, display);
            state.current_location_mut().add_item(rejected.item);
            CommandResult::failure(error)
        }
    }
}

fn do_take_all(state: &mut GameState) -> CommandResult {
    let ids: Vec<ItemId> = state
        .current_location()
        .items()
        .iter()
        .map(|i| i.id.clone())
        .collect();
    if ids.is_empty() {
        return CommandResult::rejected("There is nothing here to take.");
    }

    let mut lines = Vec::new();
    let mut reactions = Vec::new();
    let mut took_any = false;
    for id in ids {
        let result = take_one(state, &id);
        took_any |= result.success;
        lines.push(result.message);
        reactions.extend(result.reactions);
    }
    CommandResult {
        success: took_any,
        quit: false,
        message: lines.join("\n"),
        reactions,
    }
}

fn do_drop(state: &mut GameState, name: &str) -> CommandResult {
    let Some(item_id) = find_inventory_item(state, name) else {
        return CommandResult::failure(TurnError::ItemNotInInventory(name.to_string()));
    };
    drop_one(state, &item_id)
}

fn drop_one(state: &mut GameState, item_id: &ItemId) -> CommandResult {
    let Some(item) = state.inventory_mut().remove_item(item_id) else {
        return CommandResult::failure(TurnError::ItemNotInInventory(item_id.to_string()));
    };
    let result = CommandResult::success(format!("You drop the {}.", item.name))
        .with_reaction_opt(item.reaction(ItemAction::Drop));
    state.current_location_mut().add_item(item);
    result
}

fn do_drop_all(state: &mut GameState) -> CommandResult {
    let ids: Vec<ItemId> = state
        .inventory()
        .items()
        .iter()
        .map(|i| i.id.clone())
        .collect();
    if ids.is_empty() {
        return CommandResult::rejected("You have nothing to drop.");
    }

    let mut lines = Vec::new();
    let mut reactions = Vec::new();
    for id in ids {
        let result = drop_one(state, &id);
        lines.push(result.message);
        reactions.extend(result.reactions);
    }
    CommandResult {
        success: true,
        quit: false,
        message: lines.join("\n"),
        reactions,
    }
}

fn do_use(state: &mut GameState, name: &str) -> CommandResult {
    let Some(item) = find_reachable_item(state, name) else {
        return CommandResult::failure(TurnError::ItemNotFound(name.to_string()));
    };
    match item.reaction(ItemAction::Use) {
        Some(text) => {
            CommandResult::success(format!("You use the {}.", item.name)).with_reaction(text)
        }
        None => CommandResult::failure(TurnError::ItemNotUsable(item.name.clone()))
            .with_reaction_opt(item.reaction(ItemAction::UseFailed)),
    }
}

fn do_combine(state: &mut GameState, left: &str, right: &str) -> CommandResult {
    let Some(left_item) = find_reachable_item(state, left) else {
        return CommandResult::failure(TurnError::ItemNotFound(left.to_string()));
    };
    let Some(right_item) = find_reachable_item(state, right) else {
        return CommandResult::failure(TurnError::ItemNotFound(right.to_string()));
    };
    // The left-hand item carries the recipe.
    match left_item.reaction(ItemAction::Combine) {
        Some(text) => CommandResult::success(format!(
            "You combine the {} with the {}.",
            left_item.name, right_item.name
        ))
        .with_reaction(text),
        None => CommandResult::failure(TurnError::CannotCombine {
            left: left_item.name.clone(),
            right: right_item.name.clone(),
        })
        .with_reaction_opt(left_item.reaction(ItemAction::CombineFailed)),
    }
}

fn do_pour(state: &mut GameState, fluid: &str, container: &str) -> CommandResult {
    let Some(fluid_item) = find_reachable_item(state, fluid) else {
        return CommandResult::failure(TurnError::ItemNotFound(fluid.to_string()));
    };
    let Some(container_item) = find_reachable_item(state, container) else {
        return CommandResult::failure(TurnError::ItemNotFound(container.to_string()));
    };
    // The fluid carries the pour behaviour.
    match fluid_item.reaction(ItemAction::Pour) {
        Some(text) => CommandResult::success(format!(
            "You pour the {} into the {}.",
            fluid_item.name, container_item.name
        ))
        .with_reaction(text),
        None => CommandResult::failure(TurnError::CannotPour(fluid_item.name.clone()))
            .with_reaction_opt(fluid_item.reaction(ItemAction::PourFailed)),
    }
}

fn do_go(state: &mut GameState, direction: Direction) -> CommandResult {
    let Some(exit) = state.current_location().exit(direction) else {
        let error = TurnError::NoExit(direction);
        state.set_last_move_error(error.to_string());
        return CommandResult::failure(error);
    };
    if let Some(door) = &exit.door {
        if !door.is_passable() {
            let error = match door.state() {
                DoorState::Locked => TurnError::DoorIsLocked(door.name().to_string()),
                DoorState::Destroyed => TurnError::DoorIsDestroyed(door.name().to_string()),
                _ => TurnError::DoorIsClosed(door.name().to_string()),
            };
            state.set_last_move_error(error.to_string());
            return CommandResult::failure(error);
        }
    }

    let target = exit.target.clone();
    match state.move_to(&target) {
        Ok(()) => {
            state.clear_last_move_error();
            CommandResult::success(render_location(state))
        }
        Err(error) => {
            state.set_last_move_error(error.to_string());
            CommandResult::rejected(error.to_string())
        }
    }
}

fn do_go_to(state: &mut GameState, destination: &str) -> CommandResult {
    // Only exits of the current location qualify; the names come from
    // the locations they lead to.
    let pairs: Vec<(Direction, &Location)> = state
        .current_location()
        .exits()
        .values()
        .filter_map(|exit| {
            state
                .location(&exit.target)
                .map(|target| (exit.direction, target))
        })
        .collect();

    let found = fuzzy::resolve(
        destination,
        pairs.iter().map(|(_, target)| *target),
        state.fuzzy(),
    );
    let Some(found) = found else {
        let error = TurnError::NoPathTo(destination.to_string());
        state.set_last_move_error(error.to_string());
        return CommandResult::failure(error);
    };

    let found_id = found.id().clone();
    let direction = pairs
        .iter()
        .find(|(_, target)| *target.id() == found_id)
        .map(|(direction, _)| *direction);
    match direction {
        Some(direction) => do_go(state, direction),
        None => {
            let error = TurnError::NoPathTo(destination.to_string());
            state.set_last_move_error(error.to_string());
            CommandResult::failure(error)
        }
    }
}

fn do_open(state: &mut GameState, name: &str) -> CommandResult {
    let Some(direction) = find_door_exit(state, name) else {
        return CommandResult::failure(TurnError::DoorNotFound(name.to_string()));
    };
    let Some(door) = state
        .current_location_mut()
        .exit_mut(direction)
        .and_then(|exit| exit.door.as_mut())
    else {
        return CommandResult::failure(TurnError::DoorNotFound(name.to_string()));
    };

    match door.state() {
        DoorState::Open => {
            CommandResult::failure(TurnError::DoorAlreadyOpen(door.name().to_string()))
        }
        DoorState::Locked => {
            CommandResult::failure(TurnError::DoorIsLocked(door.name().to_string()))
        }
        DoorState::Destroyed => {
            CommandResult::failure(TurnError::DoorIsDestroyed(door.name().to_string()))
        }
        DoorState::Closed => {
            door.apply(DoorAction::Open);
            CommandResult::success(format!("You open the {}.", door.name()))
                .with_reaction_opt(door.reaction(DoorAction::Open))
        }
    }
}

fn do_unlock(state: &mut GameState, name: &str) -> CommandResult {
    let Some(direction) = find_door_exit(state, name) else {
        return CommandResult::failure(TurnError::DoorNotFound(name.to_string()));
    };

    // Read phase: decide everything while the state is borrowed
    // immutably, then re-borrow mutably to flip the lock.
    let Some(door) = state
        .current_location()
        .exit(direction)
        .and_then(|exit| exit.door.as_ref())
    else {
        return CommandResult::failure(TurnError::DoorNotFound(name.to_string()));
    };
    let door_name = door.name().to_string();
    if door.state() == DoorState::Destroyed {
        return CommandResult::failure(TurnError::DoorIsDestroyed(door_name));
    }
    let Some(key_id) = door.required_key().cloned() else {
        return CommandResult::failure(TurnError::NoKeyRequired(door_name));
    };
    if door.state() != DoorState::Locked {
        return CommandResult::failure(TurnError::DoorNotLocked(door_name));
    }
    if !state.inventory().contains(&key_id) {
        return CommandResult::failure(TurnError::WrongKey(door_name));
    }

    let Some(door) = state
        .current_location_mut()
        .exit_mut(direction)
        .and_then(|exit| exit.door.as_mut())
    else {
        return CommandResult::failure(TurnError::DoorNotFound(name.to_string()));
    };
    door.apply(DoorAction::Unlock);
    CommandResult::success(format!("You unlock the {door_name}."))
        .with_reaction_opt(door.reaction(DoorAction::Unlock))
}

fn do_examine(state: &mut GameState, target: &str) -> CommandResult {
    if let Some(item) = find_reachable_item(state, target) {
        let item_id = item.id.clone();
        return examine_item(state, &item_id);
    }
    if let Some(npc) = fuzzy::resolve(target, state.current_location().npcs(), state.fuzzy()) {
        let message = if npc.description.is_empty() {
            format!("You see nothing special about {}.", npc.name)
        } else {
            npc.description.clone()
        };
        return CommandResult::success(message);
    }
    if let Some(direction) = find_door_exit(state, target) {
        if let Some(door) = state
            .current_location()
            .exit(direction)
            .and_then(|exit| exit.door.as_ref())
        {
            return CommandResult::success(format!(
                "The {} is {}.",
                door.name(),
                door.state()
            ));
        }
    }
    CommandResult::failure(TurnError::ItemNotFound(target.to_string()))
}

fn examine_item(state: &mut GameState, item_id: &ItemId) -> CommandResult {
    let item = state
        .inventory()
        .items()
        .iter()
        .find(|i| &i.id == item_id)
        .or_else(|| {
            state
                .current_location()
                .items()
                .iter()
                .find(|i| &i.id == item_id)
        });
    let Some(item) = item else {
        return CommandResult::failure(TurnError::ItemNotFound(item_id.to_string()));
    };

    let mut message = if item.description.is_empty() {
        format!("You see nothing special about the {}.", item.name)
    } else {
        item.description.clone()
    };
    let mut extra_turns = 0;
    if let Some(readable) = &item.readable {
        if readable.condition.evaluate(state) {
            message.push('\n');
            message.push_str(&readable.text);
            extra_turns = readable.turn_cost;
        } else if let Some(hint) = &readable.hint {
            message.push('\n');
            message.push_str(hint);
        }
    }
    state.advance_turns(extra_turns);
    CommandResult::success(message)
}

fn do_inventory(state: &GameState) -> CommandResult {
    let inventory = state.inventory();
    if inventory.is_empty() {
        return CommandResult::success("You are carrying nothing.");
    }
    let mut lines = vec!["You are carrying:".to_string()];
    for item in inventory.items() {
        lines.push(format!("  - {} ({})", item.name, item.weight));
    }
    if let Some(capacity) = inventory.capacity() {
        lines.push(format!(
            "Load: {} of {}",
            inventory.total_weight(),
            capacity
        ));
    }
    CommandResult::success(lines.join("\n"))
}

fn do_stats(state: &GameState) -> CommandResult {
    let inventory = state.inventory();
    let mut lines = vec![
        format!("Turns played: {}", state.turns()),
        format!("Items carried: {}", inventory.len()),
    ];
    match inventory.capacity() {
        Some(capacity) => lines.push(format!(
            "Load: {} of {}",
            inventory.total_weight(),
            capacity
        )),
        None => lines.push(format!("Load: {}", inventory.total_weight())),
    }
    CommandResult::success(lines.join("\n"))
}
