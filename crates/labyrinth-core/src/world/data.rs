//! The default five-room labyrinth.

use std::collections::{BTreeMap, HashMap};

use crate::item::Item;
use crate::world::{Answer, Direction, Puzzle, Reward, Room, RoomId, World};

impl World {
    /// The game's standard world: four rooms around a central hall,
    /// with the treasure room locked behind the rusty key.
    pub fn labyrinth() -> Self {
        let mut rooms = HashMap::new();

        rooms.insert(
            RoomId::Entrance,
            Room {
                name: "Entrance Hall".into(),
                description: "A cold stone vestibule. Water drips somewhere in the dark, \
                              and a narrow archway opens to the north."
                    .into(),
                items: vec![Item::record(
                    "torch",
                    "A pitch-soaked torch. It would light up a dark room.",
                )],
                exits: exits(&[(Direction::North, RoomId::Hall)]),
                puzzle: None,
                default_reward: None,
            },
        );

        rooms.insert(
            RoomId::Hall,
            Room {
                name: "Great Hall".into(),
                description: "A vaulted hall at the heart of the labyrinth. Doorways lead \
                              off in every direction; the northern one is banded with iron."
                    .into(),
                items: vec![Item::record(
                    "bronze box",
                    "A small tarnished box. Something rattles inside.",
                )],
                exits: exits(&[
                    (Direction::South, RoomId::Entrance),
                    (Direction::West, RoomId::Library),
                    (Direction::East, RoomId::TrapRoom),
                    (Direction::North, RoomId::TreasureRoom),
                ]),
                puzzle: Some(Puzzle::new(
                    "Two hands hold five fingers each. How many fingers in all?",
                    Answer::Text("10".into()),
                )),
                default_reward: Some(Item::record(
                    "silver medal",
                    "Stamped with a maze nobody has ever walked out of.",
                )),
            },
        );

        rooms.insert(
            RoomId::Library,
            Room {
                name: "Forgotten Library".into(),
                description: "Shelves sag under centuries of mouldering books. A reading \
                              stand still holds one open volume."
                    .into(),
                items: vec![
                    Item::record("sword", "A short sword, still sharp under the dust."),
                    Item::record(
                        "ancient book",
                        "The open page shows a floor plan with one room inked in red.",
                    ),
                ],
                exits: exits(&[(Direction::East, RoomId::Hall)]),
                puzzle: Some(
                    Puzzle::new(
                        "I speak without a mouth and return every word you say. What am I?",
                        Answer::AnyOf(vec!["echo".into(), "эхо".into()]),
                    )
                    .with_reward(Reward::One(Item::record(
                        "ancient scroll",
                        "The ink spells out a three-digit number: 542.",
                    ))),
                ),
                default_reward: Some(Item::label("ancient scroll")),
            },
        );

        rooms.insert(
            RoomId::TrapRoom,
            Room {
                name: "Trap Room".into(),
                description: "The flagstones here sit unevenly, and thin grooves run along \
                              the walls. Something about this room wants you to hurry."
                    .into(),
                items: vec![],
                exits: exits(&[(Direction::West, RoomId::Hall)]),
                puzzle: Some(
                    Puzzle::new(
                        "How many sides does a triangle have?",
                        Answer::Number(3),
                    )
                    .with_reward(Reward::One(Item::record(
                        "treasure key",
                        "A small ornate key. It hums faintly in your hand.",
                    )))
                    .with_points(15),
                ),
                default_reward: Some(Item::label("special key")),
            },
        );

        rooms.insert(
            RoomId::TreasureRoom,
            Room {
                name: "Treasure Room".into(),
                description: "Gold light seeps from the seams of a great iron-bound chest \
                              standing alone in the middle of the floor."
                    .into(),
                items: vec![Item::label("treasure chest")],
                exits: exits(&[(Direction::South, RoomId::Hall)]),
                puzzle: Some(
                    Puzzle::new(
                        "Scratched beside the lock: \"rooms, doors out of the great hall, \
                         keys hidden in the maze\". Three digits.",
                        Answer::Text("542".into()),
                    )
                    .with_points(25),
                ),
                default_reward: Some(Item::label("treasure")),
            },
        );

        World::new(rooms)
    }
}

fn exits(pairs: &[(Direction, RoomId)]) -> BTreeMap<Direction, RoomId> {
    pairs.iter().copied().collect()
}
