use gps_route::data_structures::{IndexedMinPriorityQueue, PriorityEntry};
use gps_route::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_extracts_in_ascending_priority() {
    let (a, b, c) = (1, 2, 3);
    let mut queue = IndexedMinPriorityQueue::new();
    queue.insert(a, 5u32).unwrap();
    queue.insert(b, 1).unwrap();
    queue.insert(c, 3).unwrap();

    let order: Vec<usize> = (0..3).map(|_| queue.extract_min().unwrap().vertex).collect();
    assert_eq!(order, vec![b, c, a]);
    assert!(queue.is_empty());
}

#[test]
fn test_decrease_key_replaces_priority() {
    let mut queue = IndexedMinPriorityQueue::new();
    queue.insert(7, 10u32).unwrap();
    queue.insert(8, 6).unwrap();
    queue.decrease_key(7, 2).unwrap();

    assert_eq!(queue.len(), 2);
    assert_eq!(queue.extract_min().unwrap(), PriorityEntry { vertex: 7, priority: 2 });
    assert_eq!(queue.extract_min().unwrap(), PriorityEntry { vertex: 8, priority: 6 });
}

#[test]
fn test_decrease_key_inserts_missing_vertex() {
    let mut queue = IndexedMinPriorityQueue::new();
    queue.decrease_key(4, 9u64).unwrap();

    assert!(queue.contains(4));
    assert_eq!(queue.peek_min().unwrap(), PriorityEntry { vertex: 4, priority: 9 });
}

#[test]
fn test_decrease_key_rejects_increase() {
    let mut queue = IndexedMinPriorityQueue::new();
    queue.insert(1, 3u32).unwrap();

    assert!(matches!(queue.decrease_key(1, 4), Err(Error::PriorityIncrease(1))));
    assert_eq!(queue.priority(1), Some(3));
}

#[test]
fn test_duplicate_insert_is_rejected() {
    let mut queue = IndexedMinPriorityQueue::new();
    queue.insert(5, 1u32).unwrap();

    assert!(matches!(queue.insert(5, 0), Err(Error::DuplicateEntry(5))));
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_empty_queue_access_fails() {
    let mut queue: IndexedMinPriorityQueue<u32> = IndexedMinPriorityQueue::new();

    assert!(matches!(queue.extract_min(), Err(Error::EmptyQueue)));
    assert!(matches!(queue.peek_min(), Err(Error::EmptyQueue)));

    queue.insert(1, 1).unwrap();
    queue.extract_min().unwrap();
    assert!(matches!(queue.extract_min(), Err(Error::EmptyQueue)));
}

#[test]
fn test_peek_does_not_remove() {
    let mut queue = IndexedMinPriorityQueue::new();
    queue.insert(2, 8u32).unwrap();
    queue.insert(3, 4).unwrap();

    assert_eq!(queue.peek_min().unwrap().vertex, 3);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.extract_min().unwrap().vertex, 3);
}

#[test]
fn test_grows_past_initial_capacity() {
    let mut queue = IndexedMinPriorityQueue::with_capacity(2);
    for vertex in (1..=100).rev() {
        queue.insert(vertex, vertex as u32).unwrap();
    }

    for expected in 1..=100 {
        assert_eq!(queue.extract_min().unwrap().vertex, expected);
    }
}

#[test]
fn test_equal_priorities_are_reproducible() {
    let run = || {
        let mut queue = IndexedMinPriorityQueue::new();
        for vertex in 1..=6 {
            queue.insert(vertex, 1u32).unwrap();
        }
        (0..6).map(|_| queue.extract_min().unwrap().vertex).collect::<Vec<_>>()
    };

    let first = run();
    assert_eq!(first, run());
    let mut sorted = first.clone();
    sorted.sort();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_heap_property_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut queue = IndexedMinPriorityQueue::new();
    // Mirror of the live entries
    let mut live: Vec<Option<u32>> = vec![None; 51];

    for _ in 0..2_000 {
        let vertex = rng.gen_range(1..=50);
        match rng.gen_range(0..3) {
            0 if live[vertex].is_none() => {
                let priority = rng.gen_range(0..1_000);
                queue.insert(vertex, priority).unwrap();
                live[vertex] = Some(priority);
            }
            1 => {
                let priority = match live[vertex] {
                    Some(current) => rng.gen_range(0..=current),
                    None => rng.gen_range(0..1_000),
                };
                queue.decrease_key(vertex, priority).unwrap();
                live[vertex] = Some(priority);
            }
            _ => {
                if let Ok(entry) = queue.extract_min() {
                    let smallest = live.iter().flatten().min().copied();
                    assert_eq!(Some(entry.priority), smallest);
                    assert_eq!(live[entry.vertex], Some(entry.priority));
                    live[entry.vertex] = None;
                } else {
                    assert!(live.iter().all(Option::is_none));
                }
            }
        }

        assert!(queue.is_heap());
        assert_eq!(queue.len(), live.iter().flatten().count());
    }
}
