//! Completion notification, run as an explicit step after `generate` returns.

use crate::model::GeneratedDungeon;

pub trait LayoutListener {
    fn on_layout_ready(&mut self, dungeon: &GeneratedDungeon);
}

#[derive(Default)]
pub struct LayoutPublisher {
    listeners: Vec<Box<dyn LayoutListener>>,
}

impl LayoutPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: impl LayoutListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Notifies listeners in subscription order.
    pub fn publish(&mut self, dungeon: &GeneratedDungeon) {
        for listener in &mut self.listeners {
            listener.on_layout_ready(dungeon);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::config::GeneratorConfig;
    use crate::generator::DungeonGenerator;

    struct RoomCounter {
        seen: Rc<RefCell<Vec<u64>>>,
    }

    impl LayoutListener for RoomCounter {
        fn on_layout_ready(&mut self, dungeon: &GeneratedDungeon) {
            self.seen.borrow_mut().push(dungeon.room_count() as u64);
        }
    }

    struct SeedRecorder {
        seen: Rc<RefCell<Vec<u64>>>,
    }

    impl LayoutListener for SeedRecorder {
        fn on_layout_ready(&mut self, dungeon: &GeneratedDungeon) {
            self.seen.borrow_mut().push(dungeon.seed());
        }
    }

    #[test]
    fn listeners_hear_each_published_layout_in_order() {
        let dungeon =
            DungeonGenerator::new(GeneratorConfig::default(), 31).generate().expect("generates");
        let order = Rc::new(RefCell::new(Vec::new()));

        let mut publisher = LayoutPublisher::new();
        publisher.subscribe(RoomCounter { seen: Rc::clone(&order) });
        publisher.subscribe(SeedRecorder { seen: Rc::clone(&order) });
        assert_eq!(publisher.listener_count(), 2);

        publisher.publish(&dungeon);
        assert_eq!(*order.borrow(), vec![dungeon.room_count() as u64, 31]);
    }
}
