use std::{sync::mpsc, thread, time::Duration};

use log::{trace, warn};

use crate::{Error, Result};

/// Pause between two placed orders, and between two served ones
pub const SERVE_INTERVAL: Duration = Duration::from_millis(500);

/// Places `orders` into a queue from one thread while another serves them
///
/// Orders are served first in, first out. The consumer keeps serving until the
/// producer is done and the queue is drained, then the served orders are
/// returned in the order they left the queue.
pub fn ordering_system<I>(orders: I, interval: Duration) -> Result<Vec<String>>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let orders: Vec<String> = orders.into_iter().map(Into::into).collect();
    let (tx, rx) = mpsc::channel::<String>();

    let producer = thread::spawn(move || {
        for order in orders {
            trace!(target: "orders", "placing {order}");
            if tx.send(order).is_err() {
                break;
            }
            thread::sleep(interval);
        }
    });

    let consumer = thread::spawn(move || {
        let mut served = Vec::new();
        for order in rx {
            warn!(target: "orders", "{order}");
            served.push(order);
            thread::sleep(interval);
        }
        served
    });

    producer.join().map_err(|_| Error::WorkerPanicked("producer"))?;
    consumer.join().map_err(|_| Error::WorkerPanicked("consumer"))
}

#[cfg(test)]
mod test {
    use super::*;

    const FAST: Duration = Duration::from_millis(1);

    #[test]
    fn serves_in_order() {
        let served = ordering_system(["pizza", "samosa", "pasta", "biryani", "burger"], FAST).unwrap();
        assert_eq!(served, vec!["pizza", "samosa", "pasta", "biryani", "burger"]);
    }

    #[test]
    fn no_orders() {
        let served = ordering_system(Vec::<String>::new(), FAST).unwrap();
        assert!(served.is_empty());
    }

    #[test]
    fn owned_orders() {
        let orders: Vec<String> = (0..20).map(|i| format!("order #{i}")).collect();
        let served = ordering_system(orders.clone(), Duration::ZERO).unwrap();
        assert_eq!(served, orders);
    }
}
