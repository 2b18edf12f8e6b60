use std::{env, path::PathBuf, process, sync::Arc};

use chrono::NaiveDate;
use colored::Colorize;
use finance_core::{
    config::ConfigManager,
    core::utils::PathResolver,
    domain::{
        common::round_cents, Budget, BudgetCategory, BudgetPeriod, BudgetStatus, Expense,
        ExpenseCategory,
    },
    init,
    storage::{JsonFileStorage, Persistence},
    utils::build_info,
    FinanceError, FinanceManager,
};
use uuid::Uuid;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("{} {err}", "Error:".red().bold());
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();
    let home = take_option(&mut args, "--home").map(PathBuf::from);
    let mut args = args.into_iter();
    let Some(command) = args.next() else {
        print_usage();
        process::exit(1);
    };

    if command == "version" {
        println!("{}", build_info::current().summary());
        return Ok(());
    }

    let manager = open_manager(home)?;
    let currency = manager.config().currency.as_str();
    let rest: Vec<String> = args.collect();

    match command.as_str() {
        "status" => print_statuses(&manager.budget_statuses(), currency),
        "breakdown" => {
            let breakdown = manager.category_breakdown_current_month();
            if breakdown.is_empty() {
                println!("No spending this month.");
            }
            for (category, amount) in breakdown {
                println!("{:<16} {:>12.2} {}", category.to_string(), amount, currency);
            }
        }
        "net-worth" => {
            let snapshot = manager.net_worth();
            println!("Assets       {:>12.2} {}", snapshot.total_assets, currency);
            println!("Liabilities  {:>12.2} {}", snapshot.total_liabilities, currency);
            println!("Net worth    {:>12.2} {}", snapshot.net_worth, currency);
        }
        "snapshot" => {
            let snapshot = manager.record_snapshot();
            println!(
                "Recorded snapshot for {}: net worth {:.2} {}",
                snapshot.date, snapshot.net_worth, currency
            );
        }
        "history" => {
            for snapshot in manager.snapshot_history() {
                let change = snapshot
                    .monthly_change
                    .map(|change| format!("{:+.2} ({:+.1}%)", change.net_worth, change.percentage))
                    .unwrap_or_else(|| "-".into());
                println!("{}  {:>12.2}  {}", snapshot.date, snapshot.net_worth, change);
            }
        }
        "payoff" => {
            let id: Uuid = rest
                .first()
                .ok_or_else(|| FinanceError::InvalidInput("payoff requires a liability id".into()))?
                .parse::<Uuid>()
                .map_err(|err| FinanceError::InvalidInput(format!("liability id: {err}")))?;
            let extras = rest[1..]
                .iter()
                .map(|value| value.parse::<f64>())
                .collect::<Result<Vec<_>, _>>()?;
            let projection = if extras.is_empty() {
                manager.project_liability(id)?
            } else {
                manager.project_liability_with(id, &extras)?
            };
            println!(
                "Paid off in {} months on {} with {:.2} {} interest",
                projection.months_remaining,
                projection.payoff_date,
                projection.total_interest_remaining,
                currency
            );
            for scenario in projection.extra_payment_scenarios {
                println!(
                    "  +{:.2}/month saves {} months and {:.2} interest",
                    scenario.extra_amount, scenario.months_saved, scenario.interest_saved
                );
            }
        }
        "bill" => {
            let generated = manager.process_subscriptions();
            println!("Generated {} subscription expense(s)", generated.len());
        }
        "add-expense" => {
            if rest.len() < 3 {
                return Err(FinanceError::InvalidInput(
                    "add-expense requires <amount> <category> <date> [description]".into(),
                )
                .into());
            }
            let amount: f64 = rest[0].parse()?;
            let category: ExpenseCategory =
                rest[1].parse().map_err(FinanceError::InvalidInput)?;
            let date = NaiveDate::parse_from_str(&rest[2], "%Y-%m-%d")?;
            let description = rest[3..].join(" ");
            let id = manager.add_expense(Expense::new(amount, category, description, date));
            println!("Added expense {}", id);
        }
        "set-budget" => {
            if rest.len() < 3 {
                return Err(FinanceError::InvalidInput(
                    "set-budget requires <category|Total> <period> <limit>".into(),
                )
                .into());
            }
            let category: BudgetCategory = rest[0].parse().map_err(FinanceError::InvalidInput)?;
            let period: BudgetPeriod = rest[1].parse().map_err(FinanceError::InvalidInput)?;
            let limit: f64 = rest[2].parse()?;
            let budget = manager.upsert_budget(Budget::new(category, period, limit));
            println!(
                "Budget {} {} set to {:.2} {}",
                budget.category, budget.period, budget.limit, currency
            );
        }
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn open_manager(home: Option<PathBuf>) -> CliResult<FinanceManager> {
    let configs = ConfigManager::with_base_dir(PathResolver::resolve_base(home))?;
    let config = configs.load()?;
    let storage = JsonFileStorage::new(configs.data_dir(&config))?;
    let persistence = Persistence::with_namespace(Arc::new(storage), config.key_namespace.clone());
    Ok(FinanceManager::new(persistence, config))
}

fn take_option(args: &mut Vec<String>, flag: &str) -> Option<String> {
    let index = args.iter().position(|arg| arg == flag)?;
    args.remove(index);
    if index < args.len() {
        Some(args.remove(index))
    } else {
        None
    }
}

fn print_statuses(statuses: &[BudgetStatus], currency: &str) {
    if statuses.is_empty() {
        println!("No budgets configured.");
        return;
    }
    for status in statuses {
        let label = format!("{} ({})", status.category, status.period);
        let usage = format!(
            "{:.2} / {:.2} {} ({:.0}%)",
            round_cents(status.spent),
            round_cents(status.limit),
            currency,
            status.percentage
        );
        let line = format!("{:<28} {}", label, usage);
        if status.is_over_budget {
            println!("{} {}", line.red(), "over budget".red().bold());
        } else if status.is_near_limit {
            println!("{} {}", line.yellow(), "near limit".yellow());
        } else {
            println!("{} {:.2} left", line.green(), status.remaining);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Usage: finance_core_cli [--home DIR] <command>\n\
         Commands:\n  \
         status\n  \
         breakdown\n  \
         net-worth\n  \
         snapshot\n  \
         history\n  \
         payoff <liability-id> [extra...]\n  \
         bill\n  \
         add-expense <amount> <category> <YYYY-MM-DD> [description]\n  \
         set-budget <category|Total> <daily|weekly|monthly> <limit>\n  \
         version"
    );
}
