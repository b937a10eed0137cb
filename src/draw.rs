use crate::particles::Particle;
use crate::session::{BOARD_HEIGHT, BOARD_WIDTH, Session, UNIT_SIZE};
use crate::snake::Direction;

pub const WIDTH: u32 = BOARD_WIDTH as u32;
pub const HEIGHT: u32 = BOARD_HEIGHT as u32;

const GOLD: (u8, u8, u8, u8) = (255, 215, 0, 255);
const ORANGE: (u8, u8, u8, u8) = (255, 165, 0, 255);

/// Draw one playing frame: board, food, snake, particles, HUD.
pub fn draw_session(frame: &mut [u8], session: &Session) {
    clear_rgba(frame, 26, 26, 26, 255);
    draw_checkerboard(frame);
    draw_apple(frame, session);
    draw_golden_apple(frame, session);
    draw_snake(frame, session);
    draw_particles(frame, session);
    draw_hud(frame, session);
}

fn draw_checkerboard(frame: &mut [u8]) {
    let unit = UNIT_SIZE as u32;
    for gy in 0..HEIGHT / unit {
        for gx in 0..WIDTH / unit {
            if (gx + gy) % 2 == 0 {
                fill_rect_rgba(frame, gx * unit, gy * unit, unit, unit, 30, 30, 30, 255);
            }
        }
    }
}

fn draw_apple(frame: &mut [u8], session: &Session) {
    let (cx, cy) = session.food.apple.center(UNIT_SIZE);
    fill_cell(frame, session.food.apple.x, session.food.apple.y, 255, 51, 51);
    stroke_circle(frame, cx as i32, cy as i32, UNIT_SIZE / 2 + 2, GOLD);
}

fn draw_golden_apple(frame: &mut [u8], session: &Session) {
    if let Some(cell) = session.food.golden {
        let (cx, cy) = cell.center(UNIT_SIZE);
        fill_cell(frame, cell.x, cell.y, 255, 215, 0);
        stroke_circle(frame, cx as i32, cy as i32, UNIT_SIZE / 2 + 2, ORANGE);
        stroke_circle(frame, cx as i32, cy as i32, UNIT_SIZE / 2 + 4, GOLD);
    }
}

fn draw_snake(frame: &mut [u8], session: &Session) {
    let base = session.score.color();
    for (i, cell) in session.snake.segments().enumerate() {
        let color = if session.rainbow.is_active() {
            session.rainbow.color(i as u32 * 10)
        } else if i == 0 {
            base
        } else {
            // Body fades toward the tail.
            let factor = (1.0 - i as f32 * 0.05).max(0.3);
            scale_color(base, factor)
        };
        fill_cell(frame, cell.x, cell.y, color[0], color[1], color[2]);
        if i == 0 {
            draw_eyes(frame, cell.x, cell.y, session.snake.direction());
        }
    }
}

fn draw_eyes(frame: &mut [u8], x: i32, y: i32, dir: Direction) {
    let (e1, e2) = match dir {
        Direction::Right => ((x + 18, y + 6), (x + 18, y + 18)),
        Direction::Left => ((x + 7, y + 6), (x + 7, y + 18)),
        Direction::Up => ((x + 6, y + 7), (x + 18, y + 7)),
        Direction::Down => ((x + 6, y + 18), (x + 18, y + 18)),
    };
    for (ex, ey) in [e1, e2] {
        fill_rect_rgba(frame, ex as u32, ey as u32, 3, 3, 0, 0, 0, 255);
    }
}

fn draw_particles(frame: &mut [u8], session: &Session) {
    for p in session.particles.iter() {
        fill_particle(frame, p);
    }
}

fn fill_particle(frame: &mut [u8], p: &Particle) {
    let r = p.radius();
    let (px, py) = (p.x as i32, p.y as i32);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                let x = px + dx;
                let y = py + dy;
                if x >= 0 && y >= 0 {
                    blend_pixel(frame, x as u32, y as u32, p.color[0], p.color[1], p.color[2], 255);
                }
            }
        }
    }
}

fn draw_hud(frame: &mut [u8], session: &Session) {
    draw_text(
        frame,
        &format!("SCORE: {}", session.score.score()),
        8,
        8,
        2,
        (0, 255, 0, 255),
    );
    draw_text(
        frame,
        &format!("LEVEL: {}", session.score.level()),
        180,
        8,
        2,
        GOLD,
    );
    draw_text(
        frame,
        &format!("LENGTH: {}", session.snake.len()),
        340,
        8,
        2,
        (255, 107, 107, 255),
    );
}

/// Home screen: title block, gliding demo snake, high-score panel, prompts.
/// `anim` is a frame counter owned by the event loop.
pub fn draw_home(frame: &mut [u8], high_score: u32, anim: u32) {
    clear_rgba(frame, 10, 31, 10, 255);

    // Layered title for a cheap drop-shadow.
    let title = "SNAKE";
    let title_x = centered_x(title, 8);
    draw_text(frame, title, title_x + 4, 84, 8, (0, 68, 0, 255));
    draw_text(frame, title, title_x, 80, 8, (0, 255, 0, 255));
    draw_text(frame, "G A M E", centered_x("G A M E", 4), 160, 4, (0, 204, 0, 255));
    stroke_rect_rgba(frame, 50, 50, 500, 170, 0, 255, 0, 255);

    draw_text(
        frame,
        "CLASSIC ARCADE ACTION",
        centered_x("CLASSIC ARCADE ACTION", 2),
        250,
        2,
        (255, 255, 0, 255),
    );

    draw_demo_snake(frame, anim);

    // High-score panel.
    fill_rect_rgba(frame, 200, 420, 200, 50, 45, 74, 45, 255);
    stroke_rect_rgba(frame, 200, 420, 200, 50, 255, 215, 0, 255);
    draw_text(frame, "HIGH SCORE", centered_x("HIGH SCORE", 2), 428, 2, GOLD);
    let score_text = format!("{high_score}");
    draw_text(frame, &score_text, centered_x(&score_text, 2), 450, 2, (255, 255, 255, 255));

    draw_text(
        frame,
        "PRESS ENTER TO START",
        centered_x("PRESS ENTER TO START", 2),
        352,
        2,
        (255, 255, 255, 255),
    );
    draw_text(
        frame,
        "CONTROLS: WASD OR ARROW KEYS",
        centered_x("CONTROLS: WASD OR ARROW KEYS", 2),
        500,
        2,
        (136, 136, 136, 255),
    );
}

/// Four-segment demo snake chasing a demo apple, wobbling on a sine.
fn draw_demo_snake(frame: &mut [u8], anim: u32) {
    let base_x = 320 + (50.0 * (anim as f32 * 0.02).sin()) as i32;
    for i in 0..4 {
        let x = (base_x + 60 - i * 20) as u32;
        if i == 0 {
            fill_rect_rgba(frame, x, 300, 15, 15, 0, 255, 0, 255);
        } else {
            let level = ((1.0 - i as f32 * 0.2) * 255.0) as u8;
            fill_rect_rgba(frame, x, 300, 15, 15, level, level, 0, 255);
        }
    }
    let apple_x = (base_x + 100) as u32;
    fill_rect_rgba(frame, apple_x, 300, 15, 15, 255, 51, 51, 255);
    stroke_rect_rgba(frame, apple_x, 300, 15, 15, 255, 255, 0, 255);
}

/// Game-over overlay on top of the final board.
pub fn draw_game_over(frame: &mut [u8], session: &Session, high_score: u32, new_record: bool) {
    draw_session(frame, session);
    fill_rect_rgba(frame, 0, 0, WIDTH, HEIGHT, 0, 0, 0, 160);

    let title = "GAME OVER";
    let tx = centered_x(title, 4);
    draw_text(frame, title, tx + 3, 183, 4, (51, 51, 51, 255));
    draw_text(frame, title, tx, 180, 4, (255, 68, 68, 255));

    if new_record {
        draw_text(
            frame,
            "NEW HIGH SCORE!",
            centered_x("NEW HIGH SCORE!", 3),
            240,
            3,
            GOLD,
        );
    }

    // Stats panel.
    fill_rect_rgba(frame, 120, 340, 360, 100, 34, 34, 34, 255);
    stroke_rect_rgba(frame, 120, 340, 360, 100, 255, 215, 0, 255);
    let stats = [
        format!("FINAL SCORE: {}", session.score.score()),
        format!("HIGH SCORE: {high_score}"),
        format!("LEVEL REACHED: {}", session.score.level()),
        format!("SNAKE LENGTH: {}", session.snake.len()),
    ];
    for (i, line) in stats.iter().enumerate() {
        draw_text(frame, line, centered_x(line, 2), 350 + i as u32 * 22, 2, (255, 255, 255, 255));
    }

    draw_text(
        frame,
        "R: RESTART  M: MENU",
        centered_x("R: RESTART  M: MENU", 2),
        480,
        2,
        GOLD,
    );
}

fn centered_x(text: &str, scale: u32) -> u32 {
    let w = text.chars().count() as u32 * 6 * scale;
    WIDTH.saturating_sub(w) / 2
}

// Framebuffer primitives.

fn clear_rgba(frame: &mut [u8], r: u8, g: u8, b: u8, a: u8) {
    for px in frame.chunks_exact_mut(4) {
        px[0] = r;
        px[1] = g;
        px[2] = b;
        px[3] = a;
    }
}

fn blend_pixel(frame: &mut [u8], x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) {
    if x >= WIDTH || y >= HEIGHT {
        return;
    }
    let idx = ((y * WIDTH + x) * 4) as usize;
    if idx + 3 >= frame.len() {
        return;
    }
    let ar = a as u16;
    let iar = (255 - a) as u16;
    frame[idx] = (((r as u16) * ar + frame[idx] as u16 * iar) / 255) as u8;
    frame[idx + 1] = (((g as u16) * ar + frame[idx + 1] as u16 * iar) / 255) as u8;
    frame[idx + 2] = (((b as u16) * ar + frame[idx + 2] as u16 * iar) / 255) as u8;
    frame[idx + 3] = 255;
}

fn fill_rect_rgba(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, r: u8, g: u8, b: u8, a: u8) {
    let x2 = (x + w).min(WIDTH);
    let y2 = (y + h).min(HEIGHT);
    for py in y..y2 {
        for px in x..x2 {
            blend_pixel(frame, px, py, r, g, b, a);
        }
    }
}

fn stroke_rect_rgba(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, r: u8, g: u8, b: u8, a: u8) {
    if w == 0 || h == 0 {
        return;
    }
    let x2 = (x + w - 1).min(WIDTH - 1);
    let y2 = (y + h - 1).min(HEIGHT - 1);
    for px in x..=x2 {
        blend_pixel(frame, px, y, r, g, b, a);
        blend_pixel(frame, px, y2, r, g, b, a);
    }
    for py in y..=y2 {
        blend_pixel(frame, x, py, r, g, b, a);
        blend_pixel(frame, x2, py, r, g, b, a);
    }
}

fn stroke_circle(frame: &mut [u8], cx: i32, cy: i32, radius: i32, col: (u8, u8, u8, u8)) {
    let r2 = radius * radius;
    let inner = (radius - 1) * (radius - 1);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            let d2 = dx * dx + dy * dy;
            // One-pixel-wide ring.
            if d2 <= r2 && d2 >= inner {
                let x = cx + dx;
                let y = cy + dy;
                if x >= 0 && y >= 0 {
                    blend_pixel(frame, x as u32, y as u32, col.0, col.1, col.2, col.3);
                }
            }
        }
    }
}

/// Fill a board cell addressed in pixel units.
fn fill_cell(frame: &mut [u8], x: i32, y: i32, r: u8, g: u8, b: u8) {
    if x < 0 || y < 0 {
        return;
    }
    fill_rect_rgba(frame, x as u32, y as u32, UNIT_SIZE as u32, UNIT_SIZE as u32, r, g, b, 255);
}

fn scale_color(color: [u8; 3], factor: f32) -> [u8; 3] {
    [
        (color[0] as f32 * factor) as u8,
        (color[1] as f32 * factor) as u8,
        (color[2] as f32 * factor) as u8,
    ]
}

fn glyph_5x7(ch: char) -> Option<[u8; 7]> {
    let c = ch.to_ascii_uppercase();
    Some(match c {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b10010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00100, 0b00000, 0b00000, 0b00100, 0b00000, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => return None,
    })
}

fn draw_char(frame: &mut [u8], ch: char, x: u32, y: u32, scale: u32, col: (u8, u8, u8, u8)) -> u32 {
    if let Some(rows) = glyph_5x7(ch) {
        for (ry, row) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (row >> (4 - rx)) & 1 == 1 {
                    for sy in 0..scale {
                        for sx in 0..scale {
                            blend_pixel(
                                frame,
                                x + rx as u32 * scale + sx,
                                y + ry as u32 * scale + sy,
                                col.0,
                                col.1,
                                col.2,
                                col.3,
                            );
                        }
                    }
                }
            }
        }
    }
    5 * scale + scale
}

fn draw_text(frame: &mut [u8], text: &str, x: u32, y: u32, scale: u32, col: (u8, u8, u8, u8)) {
    let mut cx = x;
    for ch in text.chars() {
        cx += draw_char(frame, ch, cx, y, scale, col);
    }
}
