/// Relations example: search, create, and update a relation.
use eboekhouden_sdk::{
    ClientOptions, EboekhoudenClient, NewRelation, RelationFilter, RelationType, RelationUpdate,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("EBOEKHOUDEN_USERNAME")?;
    let code1 = std::env::var("EBOEKHOUDEN_CODE1")?;
    let code2 = std::env::var("EBOEKHOUDEN_CODE2")?;

    let client = EboekhoudenClient::new(
        ClientOptions::new(username, code1, code2).debug(true),
    );

    // Search by keyword
    let matches = client
        .relations(RelationFilter {
            keyword: Some("demo".into()),
            ..Default::default()
        })
        .await?;
    println!("Matches: {}", matches.len());
    for relation in &matches {
        println!("  {} {} ({:?})", relation.code, relation.company, relation.kind);
    }

    // Create a business relation
    let id = client
        .add_relation(NewRelation {
            kind: RelationType::Business,
            code: "DEMO01".into(),
            company: "Demo Klant BV".into(),
            city: Some("Utrecht".into()),
            email: Some("administratie@demoklant.example".into()),
            ..Default::default()
        })
        .await?;
    println!("Created relation: {id:?}");

    // Update it with an address
    if let Some(id) = id {
        client
            .update_relation(RelationUpdate {
                id,
                kind: RelationType::Business,
                code: "DEMO01".into(),
                company: "Demo Klant BV".into(),
                address: Some("Stationsplein 1".into()),
                postal_code: Some("3511 ED".into()),
                city: Some("Utrecht".into()),
                ..Default::default()
            })
            .await?;
        println!("Updated relation {id}");
    }

    client.close_session().await;
    Ok(())
}
