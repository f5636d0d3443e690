//! Walks through the library on a small list of users.
//!
//! Run with: cargo run --example users

use seqfn::prelude::*;

#[derive(Debug, Clone)]
struct User {
    id: u32,
    name: String,
    age: u32,
    is_active: bool,
}

fn main() {
    let inc_double = pipe!(|x: i32| x + 1, |x: i32| x * 2);
    println!("pipe: {}", inc_double(5)); // 12

    let double_inc = compose!(|x: i32| x + 1, |x: i32| x * 2);
    println!("compose: {}", double_inc(5)); // 11

    let users = vec![
        User { id: 1, name: "Alice".into(), age: 25, is_active: true },
        User { id: 2, name: "Bob".into(), age: 30, is_active: false },
        User { id: 3, name: "Charlie".into(), age: 35, is_active: true },
    ];

    let filter_active = |users: Vec<User>| filter(&users, |user| user.is_active);
    let extract_ages = |users: Vec<User>| map(&users, |user| user.age);
    let sum_ages = |ages: Vec<u32>| reduce(&ages, 0, |total, age| total + age);

    let process = compose3(filter_active, extract_ages, sum_ages);
    println!("active age sum: {}", process(users.clone())); // 60

    let by_activity = group_by(&users, |user| user.is_active);
    for (active, members) in &by_activity {
        let names = map(members, |user| user.name.clone());
        println!("active={active}: {names:?}");
    }

    let shouted = Chain::start(&users)
        .filter(|user, _| user.age >= 30)
        .map(|user, index| User {
            name: format!("{}#{index}", user.name.to_uppercase()),
            ..user.clone()
        })
        .result();
    for user in &shouted {
        println!("{} {}", user.id, user.name);
    }
}
