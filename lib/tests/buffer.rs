use lifestep_lib::{BufferPair, GenerationBarrier, Grid, ReadGrid, ALIVE, DEAD};
use std::{
    error::Error,
    sync::atomic::{AtomicUsize, Ordering},
    thread,
};

#[test]
fn swap_exchanges_labels() -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_plaintext("o.\n.o", 'o')?;
    let buffers = BufferPair::new(&grid)?;
    assert_eq!(buffers.current().to_grid()?, grid);
    assert_eq!(buffers.next().population(), 0);

    buffers.next().set(0, 1, ALIVE);
    buffers.swap();
    assert_eq!(buffers.current().get(0, 1), ALIVE);
    assert_eq!(buffers.current().get(0, 0), DEAD);
    assert_eq!(buffers.next().to_grid()?, grid);

    buffers.swap();
    assert_eq!(buffers.snapshot()?, grid);
    Ok(())
}

#[test]
fn barrier_is_reusable() {
    const WORKERS: usize = 4;
    const ROUNDS: usize = 50;
    let barrier = GenerationBarrier::new(WORKERS);
    let arrived = AtomicUsize::new(0);
    assert_eq!(barrier.parties(), WORKERS);

    thread::scope(|scope| {
        for _ in 0..WORKERS {
            scope.spawn(|| {
                for round in 0..ROUNDS {
                    arrived.fetch_add(1, Ordering::SeqCst);
                    barrier.compute_complete();
                    assert!(arrived.load(Ordering::SeqCst) >= (round + 1) * WORKERS);
                    barrier.swap_complete();
                }
            });
        }
    });
    assert_eq!(arrived.into_inner(), WORKERS * ROUNDS);
}
