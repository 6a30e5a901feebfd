use c8::{chip8::ChipSet, resources::Rom};
use criterion::{criterion_group, criterion_main, Criterion};

const ROM_NAME: &'static str = "DRAWLOOP";

/// a tight loop that keeps pushing a sprite over the screen
const BENCH_ROM: [u8; 22] = [
    0xA2, 0x12, // 0x0200 point I at the sprite
    0x60, 0x00, // 0x0202 V0 = 0
    0x61, 0x00, // 0x0204 V1 = 0
    0xD0, 0x14, // 0x0206 draw 4 rows at (V0, V1)
    0x70, 0x03, // 0x0208 V0 += 3
    0x71, 0x01, // 0x020A V1 += 1
    0x12, 0x06, // 0x020C draw the next one
    0x00, 0x00, //
    0x00, 0x00, //
    0xF0, 0x90, // 0x0212 the box sprite
    0x90, 0xF0, //
];

static BASE_ROM: once_cell::sync::Lazy<Rom> = once_cell::sync::Lazy::new(|| {
    Rom::new(ROM_NAME, &BENCH_ROM).expect("A panic happend during the setup of the base rom.")
});

fn get_base() -> Rom {
    BASE_ROM.clone()
}

/// will setup the default configured chip
fn get_default_chip() -> ChipSet {
    let rom = get_base();
    setup_chip(rom)
}

fn setup_chip(rom: Rom) -> ChipSet {
    ChipSet::new(rom)
}

pub fn step_bench(c: &mut Criterion) {
    let mut chip = get_default_chip();
    c.bench_function("step_bench", |b| {
        b.iter(|| {
            chip.step()
                .expect("A panic happend during the emulation loop.");
        });
    });
}

pub fn print_bench(c: &mut Criterion) {
    let chip = get_default_chip();
    c.bench_function("print_bench", |b| {
        b.iter(|| {
            let _ = format!("{}", chip);
        });
    });
}

criterion_group!(benches, step_bench, print_bench);
criterion_main!(benches);
