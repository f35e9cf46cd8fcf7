//! Container validation tests
//!
//! Inventory, portal history and the ring-buffer queue used by the game.

use lost_rovers::game::{
    Inventory, Item, Location, Portal, PortalRef, PortalStack, RingQueue, Room, RoomId,
    INITIAL_QUEUE_CAPACITY, PORTAL_FLASHING_LABEL,
};

#[test]
fn test_inventory_aggregates_counts_in_insertion_order() {
    let mut inventory = Inventory::new();
    assert!(inventory.is_empty());
    assert_eq!(inventory.to_display_string(), "");

    inventory.add_part("wrench");
    inventory.add_part("bulb");
    inventory.add_part("wrench");

    assert_eq!(inventory.count("wrench"), 2);
    assert_eq!(inventory.count("bulb"), 1);
    assert_eq!(inventory.count("coin"), 0);
    assert_eq!(inventory.to_display_string(), "2 wrench\n1 bulb\n");
}

#[test]
fn test_inventory_has_at_least() {
    let mut inventory = Inventory::new();
    inventory.add_part("coin");
    inventory.add_part("coin");

    assert!(inventory.has_at_least("coin", 1));
    assert!(inventory.has_at_least("coin", 2));
    assert!(!inventory.has_at_least("coin", 3));
    assert!(!inventory.has_at_least("resistor", 1));
}

#[test]
fn test_inventory_full_removal_drops_entry() {
    let mut inventory = Inventory::new();
    for _ in 0..3 {
        inventory.add_part("mushroom");
    }
    inventory.add_part("bulb");

    assert!(inventory.remove_part("mushroom", 2));
    assert_eq!(inventory.count("mushroom"), 1);

    assert!(inventory.remove_part("mushroom", 1));
    assert_eq!(inventory.count("mushroom"), 0);
    assert_eq!(inventory.entries().len(), 1);
    assert_eq!(inventory.to_display_string(), "1 bulb\n");
}

#[test]
fn test_inventory_rejects_over_removal() {
    let mut inventory = Inventory::new();
    inventory.add_part("wrench");

    assert!(!inventory.remove_part("wrench", 2));
    assert!(!inventory.remove_part("coin", 1));
    assert_eq!(inventory.count("wrench"), 1);
}

#[test]
fn test_inventory_counts_track_net_changes() {
    let mut inventory = Inventory::new();
    let names = ["wrench", "resistor", "bulb"];
    let mut expected = [0u32; 3];

    for step in 0..60usize {
        let index = (step * 7) % names.len();
        if step % 3 == 2 {
            let amount = (step % 2 + 1) as u32;
            if inventory.remove_part(names[index], amount) {
                expected[index] -= amount;
            } else {
                assert!(expected[index] < amount);
            }
        } else {
            inventory.add_part(names[index]);
            expected[index] += 1;
        }

        for (name, count) in names.iter().zip(expected) {
            assert_eq!(inventory.count(name), count);
        }
        assert!(inventory.entries().iter().all(|entry| entry.count > 0));
    }
}

#[test]
fn test_portal_stack_lifo() {
    let mut stack = PortalStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.peek(), None);
    assert_eq!(stack.pop(), None);

    let first = PortalRef::new(RoomId(1), Location::new(2, 3));
    let second = PortalRef::new(RoomId(2), Location::new(4, 5));
    stack.push(first);
    stack.push(second);

    assert_eq!(stack.len(), 2);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![second, first]);
    assert_eq!(stack.peek(), Some(second));
    assert_eq!(stack.pop(), Some(second));
    assert_eq!(stack.pop(), Some(first));
    assert!(stack.is_empty());
}

#[test]
fn test_portal_stack_relabels_without_changing_structure() {
    let mut rooms = vec![Room::new(RoomId(0)), Room::new(RoomId(1))];
    let first = PortalRef::new(RoomId(0), Location::new(1, 1));
    let second = PortalRef::new(RoomId(1), Location::new(9, 4));
    rooms[0].set(first.location, Some(Item::Portal(Portal::new(first))));
    rooms[1].set(second.location, Some(Item::Portal(Portal::new(second))));

    let mut stack = PortalStack::new();
    stack.push(first);
    stack.push(second);

    stack.set_label_on_all(&mut rooms, PORTAL_FLASHING_LABEL);

    assert_eq!(
        rooms[0].get(first.location).map(Item::label),
        Some(PORTAL_FLASHING_LABEL)
    );
    assert_eq!(
        rooms[1].get(second.location).map(Item::label),
        Some(PORTAL_FLASHING_LABEL)
    );
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Some(second));
}

#[test]
fn test_queue_fifo_beyond_initial_capacity() {
    let mut queue = RingQueue::new();
    assert_eq!(queue.capacity(), INITIAL_QUEUE_CAPACITY);

    for value in 0..20 {
        queue.enqueue(value);
    }
    assert_eq!(queue.len(), 20);
    assert!(queue.capacity() >= 20);
    assert_eq!(
        queue.iter().copied().collect::<Vec<_>>(),
        (0..20).collect::<Vec<_>>()
    );

    for expected in 0..20 {
        assert_eq!(queue.peek(), Some(&expected));
        assert_eq!(queue.dequeue(), Some(expected));
    }
    assert!(queue.is_empty());
}

#[test]
fn test_queue_growth_while_wrapped() {
    let mut queue = RingQueue::new();
    for value in 0..5 {
        queue.enqueue(value);
    }
    for expected in 0..3 {
        assert_eq!(queue.dequeue(), Some(expected));
    }

    // Front sits mid-buffer, so these wrap before the buffer grows
    for value in 5..15 {
        queue.enqueue(value);
    }

    let drained: Vec<i32> = std::iter::from_fn(|| queue.dequeue()).collect();
    assert_eq!(drained, (3..15).collect::<Vec<_>>());
}

#[test]
fn test_queue_empty_returns_none() {
    let mut queue: RingQueue<String> = RingQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.dequeue(), None);

    queue.enqueue("only".to_string());
    assert_eq!(queue.dequeue().as_deref(), Some("only"));
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.len(), 0);
}
