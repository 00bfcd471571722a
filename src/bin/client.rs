use clap::{Args, Parser, Subcommand};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::Deserialize;
use serde_json::{json, Map, Number, Value};

/// Staff tool for arranging the seating chart
#[derive(Parser, Debug)]
#[command(name = "seating-chart")]
#[command(about = "client cli used by event staffs to interact with the seating chart server", version, long_about = None
)]
struct Cli {
    #[arg(long, default_value = "http://localhost:4000", help = "Base url of the server")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// table related ops
    #[command(arg_required_else_help = true)]
    Table(TableArgs),
    /// guest seating ops
    #[command(arg_required_else_help = true)]
    Assign(AssignArgs),
    /// advertisement banner ops
    #[command(arg_required_else_help = true)]
    Ad(AdArgs),
}

#[derive(Debug, Args)]
struct TableArgs {
    #[command(subcommand)]
    command: TableCmds,
}

#[derive(Debug, Subcommand)]
enum TableCmds {
    List,
    #[command(arg_required_else_help = true)]
    Add {
        id: String,
        #[arg(allow_negative_numbers = true)]
        x: Number,
        #[arg(allow_negative_numbers = true)]
        y: Number,
    },
    #[command(arg_required_else_help = true)]
    Move {
        id: String,
        #[arg(long, allow_negative_numbers = true, help = "New x coordinate, kept when omitted")]
        x: Option<Number>,
        #[arg(long, allow_negative_numbers = true, help = "New y coordinate, kept when omitted")]
        y: Option<Number>,
    },
    #[command(arg_required_else_help = true)]
    Remove { id: String },
}

#[derive(Debug, Args)]
struct AssignArgs {
    #[command(subcommand)]
    command: AssignCmds,
}

#[derive(Debug, Subcommand)]
enum AssignCmds {
    List,
    #[command(arg_required_else_help = true)]
    Set { guest: String, table_id: String },
    #[command(arg_required_else_help = true)]
    Remove { guest: String },
}

#[derive(Debug, Args)]
struct AdArgs {
    #[command(subcommand)]
    command: AdCmds,
}

#[derive(Debug, Subcommand)]
enum AdCmds {
    List,
    #[command(arg_required_else_help = true)]
    Add {
        id: String,
        title: String,
        image_url: String,
        #[arg(long, help = "Target opened when the banner is clicked")]
        link: Option<String>,
    },
    #[command(arg_required_else_help = true)]
    Remove { id: String },
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Sends the request and prints the outcome, json bodies are pretty printed.
async fn send(req: RequestBuilder, done: &str) -> Result<(), anyhow::Error> {
    let res = req.send().await?;
    match res.status() {
        StatusCode::OK | StatusCode::CREATED => {
            let body = res.json::<Value>().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        },
        StatusCode::NO_CONTENT => {
            println!("{}", done);
        },
        status @ (StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND | StatusCode::CONFLICT) => {
            match res.json::<ErrorResponse>().await {
                Ok(ErrorResponse { error }) => println!("request rejected ({}), {}", status, error),
                Err(_) => println!("request rejected ({})", status),
            }
        },
        unexpected => {
            println!("got unexpected status code, {}", unexpected);
        },
    }
    Ok(())
}

/// Appends each segment to the host url, percent-encoding ids and guest names.
fn url(host: &str, segments: &[&str]) -> Result<Url, anyhow::Error> {
    let mut url = Url::parse(host)?;
    url.path_segments_mut()
        .map_err(|_| anyhow::anyhow!("host cannot be a base url"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let client = Client::new();
    let host = args.host.as_str();

    match args.command {
        Commands::Table(table) => match table.command {
            TableCmds::List => send(client.get(url(host, &["api", "tables"])?), "").await?,
            TableCmds::Add { id, x, y } => {
                let req = client.post(url(host, &["api", "tables"])?).json(&json!({ "id": id, "x": x, "y": y }));
                send(req, "").await?
            },
            TableCmds::Move { id, x, y } => {
                let mut body = Map::new();
                if let Some(x) = x {
                    body.insert("x".to_string(), Value::Number(x));
                }
                if let Some(y) = y {
                    body.insert("y".to_string(), Value::Number(y));
                }
                let req = client.put(url(host, &["api", "tables", id.as_str()])?).json(&body);
                send(req, "").await?
            },
            TableCmds::Remove { id } => {
                let req = client.delete(url(host, &["api", "tables", id.as_str()])?);
                send(req, &format!("table {} removed along with its guests", id)).await?
            },
        },
        Commands::Assign(assign) => match assign.command {
            AssignCmds::List => send(client.get(url(host, &["api", "assignments"])?), "").await?,
            AssignCmds::Set { guest, table_id } => {
                let req = client.post(url(host, &["api", "assignments"])?).json(&json!({ "guest": guest, "tableId": table_id }));
                send(req, "").await?
            },
            AssignCmds::Remove { guest } => {
                let req = client.delete(url(host, &["api", "assignments", guest.as_str()])?);
                send(req, &format!("{} is no longer seated", guest)).await?
            },
        },
        Commands::Ad(ad) => match ad.command {
            AdCmds::List => send(client.get(url(host, &["api", "ads"])?), "").await?,
            AdCmds::Add { id, title, image_url, link } => {
                let req = client.post(url(host, &["api", "ads"])?)
                    .json(&json!({ "id": id, "title": title, "imageUrl": image_url, "link": link }));
                send(req, "").await?
            },
            AdCmds::Remove { id } => {
                let req = client.delete(url(host, &["api", "ads", id.as_str()])?);
                send(req, &format!("ad {} removed", id)).await?
            },
        },
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn move_takes_optional_coordinates() {
        let cli = Cli::parse_from(["client", "table", "move", "T1", "--y", "-3"]);
        match cli.command {
            Commands::Table(TableArgs { command: TableCmds::Move { id, x, y } }) => {
                assert_eq!(id, "T1");
                assert_eq!(x, None);
                assert_eq!(y, Some(Number::from(-3)));
            },
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn coordinates_keep_integer_form() {
        let cli = Cli::parse_from(["client", "table", "add", "T1", "1", "2.5"]);
        match cli.command {
            Commands::Table(TableArgs { command: TableCmds::Add { x, y, .. } }) => {
                assert_eq!(json!({ "x": x, "y": y }).to_string(), r#"{"x":1,"y":2.5}"#);
            },
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn url_encodes_each_segment() {
        let ads = url("http://localhost:4000/", &["api", "ads"]).unwrap();
        assert_eq!(ads.as_str(), "http://localhost:4000/api/ads");

        let table = url("http://localhost:4000", &["api", "tables", "a/b?c#d"]).unwrap();
        assert_eq!(table.as_str(), "http://localhost:4000/api/tables/a%2Fb%3Fc%23d");
    }
}
