use std::collections::HashSet;

use rand::Rng;
use shopgen_core::Customer;
use tracing::debug;

use crate::faker;
use crate::generators::DateWindow;

/// Generate `count` customers with unique emails and signup dates inside `signup`.
pub fn generate_customers<R: Rng + ?Sized>(
    rng: &mut R,
    count: u64,
    signup: DateWindow,
    max_attempts_row: u32,
) -> Vec<Customer> {
    let mut seen = HashSet::new();
    let mut customers = Vec::new();

    for customer_id in 1..=count as i64 {
        let first_name = faker::first_name(rng);
        let last_name = faker::last_name(rng);
        let email = unique_email(rng, &mut seen, customer_id, max_attempts_row);
        customers.push(Customer {
            customer_id,
            first_name,
            last_name,
            email,
            phone: faker::phone_number(rng),
            country: faker::country(rng),
            signup_date: signup.sample(rng),
        });
    }

    customers
}

fn unique_email<R: Rng + ?Sized>(
    rng: &mut R,
    seen: &mut HashSet<String>,
    customer_id: i64,
    max_attempts_row: u32,
) -> String {
    let mut last = String::new();
    for _ in 0..max_attempts_row.max(1) {
        let candidate = faker::email(rng);
        if seen.insert(candidate.clone()) {
            return candidate;
        }
        last = candidate;
    }

    // Customer ids never repeat, so tagging the local part with one is unique.
    let tagged = tag_email(&last, customer_id);
    debug!(customer_id, email = %tagged, "email draws exhausted, using id-tagged email");
    seen.insert(tagged.clone());
    tagged
}

fn tag_email(email: &str, customer_id: i64) -> String {
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}+{customer_id}@{domain}"),
        None => format!("customer{customer_id}@example.com"),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn window() -> DateWindow {
        let end = NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date");
        DateWindow::months_before(end, 24).expect("window")
    }

    #[test]
    fn ids_start_at_one_and_emails_are_unique() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let customers = generate_customers(&mut rng, 300, window(), 50);

        assert_eq!(customers.len(), 300);
        assert!(
            customers
                .iter()
                .enumerate()
                .all(|(idx, customer)| customer.customer_id == idx as i64 + 1)
        );

        let emails: HashSet<&str> = customers.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(emails.len(), customers.len());
    }

    #[test]
    fn exhausted_draws_fall_back_to_tagged_email() {
        let mut seen = HashSet::new();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let first = unique_email(&mut rng, &mut seen, 1, 1);

        // Re-seed so the single allowed draw repeats the first email.
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let second = unique_email(&mut rng, &mut seen, 2, 1);

        assert_ne!(first, second);
        assert!(second.contains("+2@"), "{second}");
    }
}
