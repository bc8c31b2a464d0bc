use account_persistence_sqlite::accounts::SqliteAccountRepository;
use account_server_domain::account::{AccountRepository, NewAccount};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: add_account <username> <password> [<fav_map_id>]");
        std::process::exit(1);
    }

    let username = &args[1];
    let password = &args[2];
    let fav_map_id = args.get(3).map(|id| {
        id.parse::<i32>()
            .expect("fav_map_id must be a valid integer")
    });

    let password_hash =
        bcrypt::hash(password, bcrypt::DEFAULT_COST).expect("Failed to hash password");

    let mut account = NewAccount::with_zero_stats(username, password_hash);
    account.fav_map_id = fav_map_id;

    let repository = SqliteAccountRepository::new();
    let created = repository
        .insert_account(&account)
        .await
        .expect("Failed to insert account");

    println!(
        "Created account [{}] with id [{}]",
        created.username, created.acc_id
    );
}
