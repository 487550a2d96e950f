//! Character-grid preview of a generated layout, north at the top.

use dungeon_core::{Direction, RoomGraph};

pub fn render(graph: &RoomGraph) -> String {
    let positions: Vec<_> = graph.rooms().map(|(_, room)| room.position).collect();
    let Some(min_x) = positions.iter().map(|pos| pos.x).min() else {
        return String::new();
    };
    let max_x = positions.iter().map(|pos| pos.x).max().unwrap_or(min_x);
    let min_y = positions.iter().map(|pos| pos.y).min().unwrap_or(0);
    let max_y = positions.iter().map(|pos| pos.y).max().unwrap_or(min_y);

    let width = ((max_x - min_x) * 2 + 1) as usize;
    let height = ((max_y - min_y) * 2 + 1) as usize;
    let mut canvas = vec![vec![' '; width]; height];

    for (_, room) in graph.rooms() {
        let column = ((room.position.x - min_x) * 2) as usize;
        let row = ((max_y - room.position.y) * 2) as usize;
        canvas[row][column] = room.room_type.glyph();
        if room.connection(Direction::East).is_some() {
            canvas[row][column + 1] = '-';
        }
        if room.connection(Direction::North).is_some() {
            canvas[row - 1][column] = '|';
        }
    }

    canvas
        .into_iter()
        .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
