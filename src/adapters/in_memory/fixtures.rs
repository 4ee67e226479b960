// Seed dataset for the in memory store.
//
// Parents are embedded by value, mirroring what the store itself does when a
// client creates content.

use crate::core::forum::{Comment, ForumSnapshot, Thread, Topic, User};

fn user(id: &str, username: &str, email: &str, color_hex: &str, created_at: &str) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        username: username.to_string(),
        created_at: created_at.to_string(),
        color_hex: color_hex.to_string(),
    }
}

fn topic(id: &str, title: &str, description: &str, created_at: &str, user: &User) -> Topic {
    Topic {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        created_at: created_at.to_string(),
        user: user.clone(),
    }
}

fn thread(id: &str, title: &str, created_at: &str, topic: &Topic, user: &User) -> Thread {
    Thread {
        id: id.to_string(),
        title: title.to_string(),
        created_at: created_at.to_string(),
        topic: topic.clone(),
        user: user.clone(),
    }
}

fn comment(id: &str, content: &str, created_at: &str, thread: &Thread, user: &User) -> Comment {
    Comment {
        id: id.to_string(),
        content: content.to_string(),
        created_at: created_at.to_string(),
        thread: thread.clone(),
        user: user.clone(),
    }
}

pub fn seed_snapshot() -> ForumSnapshot {
    let users = vec![
        user(
            "90fe2d9c-0b74-11ed-9873-08002771075f",
            "Petrosilius Zwackelmann",
            "petrosilius.zwackelmann@zwicki-buxtehude.de",
            "#3d315b",
            "2015-03-11 02:40:19",
        ),
        user(
            "97c85a5f-0b74-11ed-9873-08002771075f",
            "Wachtmeister Alois Dimpfelmoser",
            "alois.dimpfelmoser@polizei.de",
            "#444b6e",
            "2020-02-20 09:58:07",
        ),
        user(
            "9feb62b2-0b74-11ed-9873-08002771075f",
            "Seppl1994",
            "seppel.schubert@tum.de",
            "#848607",
            "2017-09-25 03:00:00",
        ),
        user(
            "a48fae48-0b74-11ed-9873-08002771075f",
            "xXL9Sn1pr360Xx",
            "kasperl.wimmer@tum.de",
            "#4c6134",
            "2017-09-25 03:00:00",
        ),
        user(
            "7fea61b2-0b74-11ed-9873-08002771075f",
            "Phil Toolan 🍀",
            "philtoolan@gmail.com",
            "#d31717",
            "2022-08-18 10:40:01",
        ),
    ];

    let topics = vec![
        topic(
            "aae74cc2-0b74-11ed-9873-08002771075f",
            "Cake 🍰",
            "Discussions about cake",
            "2022-07-23 20:08:03",
            &users[2],
        ),
        topic(
            "b0eebc52-0b74-11ed-9873-08002771075f",
            "Soup 🥣",
            "Share your thoughts about soup",
            "2022-07-23 20:11:35",
            &users[3],
        ),
        topic(
            "f38d81d7-0d18-11ed-9af8-08002771075f",
            "Wonton / Dumplings 🥟",
            "Share your thoughts about soup",
            "2022-07-23 20:11:35",
            &users[3],
        ),
    ];

    let threads = vec![
        thread(
            "b60af287-0b74-11ed-9873-08002771075f",
            "Sacher Torte",
            "2022-07-23 20:13:38",
            &topics[0],
            &users[2],
        ),
        thread(
            "bb73a5ae-0b74-11ed-9873-08002771075f",
            "Eating cake with a straw",
            "2022-07-23 20:15:16",
            &topics[0],
            &users[0],
        ),
        thread(
            "31d29be3-0d18-11ed-9af8-08002771075f",
            "Is tea soup?",
            "2022-07-22 15:23:09",
            &topics[1],
            &users[3],
        ),
        thread(
            "3c29a7f9-0d18-11ed-9af8-08002771075f",
            "Soup seasoning",
            "2022-07-23 11:24:27",
            &topics[1],
            &users[0],
        ),
        thread(
            "410716cd-0d18-11ed-9af8-08002771075f",
            "Goulash soup is the best soup",
            "2022-07-26 21:26:12",
            &topics[1],
            &users[2],
        ),
    ];

    let comments = vec![
        comment(
            "c1f8d260-0b74-11ed-9873-08002771075f",
            "I like Sacher Torte, pretty neat Austrian dish.",
            "2022-07-23 20:18:06",
            &threads[0],
            &users[1],
        ),
        comment(
            "c5dfcb12-0b74-11ed-9873-08002771075f",
            "????",
            "2022-07-23 20:20:14",
            &threads[1],
            &users[2],
        ),
        comment(
            "cf0503cc-0b74-11ed-9873-08002771075f",
            "Yeah, wtf dude",
            "2022-07-23 20:20:39",
            &threads[1],
            &users[3],
        ),
        comment(
            "d3663df9-0b74-11ed-9873-08002771075f",
            "You kids need to expand your horizon. I always blend cake with some almond milk to make it more enjoyable.",
            "2022-07-23 20:24:33",
            &threads[1],
            &users[0],
        ),
        comment(
            "d9bdca23-0b74-11ed-9873-08002771075f",
            "Not ok. Not even for a wizard.",
            "2022-07-23 20:25:46",
            &threads[1],
            &users[3],
        ),
    ];

    ForumSnapshot {
        users,
        topics,
        threads,
        comments,
    }
}

#[cfg(test)]
mod in_memory_fixtures_tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::collections::HashSet;

    #[fixture]
    fn snapshot() -> ForumSnapshot {
        seed_snapshot()
    }

    #[rstest]
    fn it_should_seed_every_collection(snapshot: ForumSnapshot) {
        assert_eq!(snapshot.users.len(), 5);
        assert_eq!(snapshot.topics.len(), 3);
        assert_eq!(snapshot.threads.len(), 5);
        assert_eq!(snapshot.comments.len(), 5);
    }

    #[rstest]
    fn it_should_use_unique_ids_per_collection(snapshot: ForumSnapshot) {
        let users: HashSet<_> = snapshot.users.iter().map(|u| &u.id).collect();
        let topics: HashSet<_> = snapshot.topics.iter().map(|t| &t.id).collect();
        let threads: HashSet<_> = snapshot.threads.iter().map(|t| &t.id).collect();
        let comments: HashSet<_> = snapshot.comments.iter().map(|c| &c.id).collect();
        assert_eq!(users.len(), snapshot.users.len());
        assert_eq!(topics.len(), snapshot.topics.len());
        assert_eq!(threads.len(), snapshot.threads.len());
        assert_eq!(comments.len(), snapshot.comments.len());
    }

    #[rstest]
    fn it_should_only_reference_seeded_parents(snapshot: ForumSnapshot) {
        for thread in &snapshot.threads {
            assert!(snapshot.topics.contains(&thread.topic));
            assert!(snapshot.users.contains(&thread.user));
        }
        for comment in &snapshot.comments {
            assert!(snapshot.threads.contains(&comment.thread));
            assert!(snapshot.users.contains(&comment.user));
        }
    }
}
