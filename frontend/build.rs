use dotenvy::dotenv;

const DEFAULT_CATALOG_URL: &str = "http://localhost:7575/catalog";

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");
  println!("cargo::rerun-if-env-changed=CATALOG_URL");

  // a missing .env is fine, the variable may come from the shell
  let _ = dotenv();

  match std::env::var("CATALOG_URL") {
    Ok(url) if !url.trim().is_empty() => {
      println!("cargo::rustc-env=CATALOG_URL={}", url.trim());
    },
    _ => {
      println!("cargo::warning=CATALOG_URL not set, falling back to {}", DEFAULT_CATALOG_URL);
      println!("cargo::rustc-env=CATALOG_URL={}", DEFAULT_CATALOG_URL);
    }
  }
}
