//! Dispatch and per-command handlers.
//!
//! Each `handle_*` calls one API method, renders the returned `CmdResult`, and
//! prints its messages. Errors bubble up to `main`, which prints them and
//! exits non-zero.

use super::logger::init_logger;
use super::render::{
    print_messages, render_categories, render_delete_prompt, render_page_footer,
    render_product_detail, render_product_grid, render_product_list,
};
use super::setup::{Cli, Commands, ListArgs, SortArg, ViewMode};
use clap::Parser;
use stockroom::api::{CategorySelection, ConfigAction, ListQuery};
use stockroom::commands::config::{KEY_DEFAULT_CATEGORY, KEY_RESULTS_PER_PAGE};
use stockroom::error::Result;
use stockroom::init::{initialize, resolve_data_dir, StockroomContext};
use stockroom::model::ProductDraft;
use std::io::{self, BufRead, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let data_dir = resolve_data_dir(cli.store.as_deref())?;
    let mut ctx = initialize(data_dir);

    match cli.command {
        Some(Commands::Add {
            title,
            price,
            stock,
            image,
            description,
            category,
            new_category,
        }) => {
            let mut draft = ProductDraft {
                image,
                title,
                price,
                description,
                stock,
            };
            handle_add(&mut ctx, &mut draft, category, new_category)
        }
        Some(Commands::Categories) => handle_categories(&ctx),
        Some(Commands::List(args)) => handle_list(&ctx, args),
        Some(Commands::View { id }) => handle_view(&ctx, &id),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, &id, yes),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_list(
            &ctx,
            ListArgs {
                page: 1,
                per_page: None,
                category: None,
                sort: SortArg::Newest,
                view: ViewMode::List,
            },
        ),
    }
}

fn handle_add(
    ctx: &mut StockroomContext,
    draft: &mut ProductDraft,
    category: Option<String>,
    new_category: Option<String>,
) -> Result<()> {
    let selection = CategorySelection {
        selected: category.unwrap_or_else(|| ctx.config.default_category.clone()),
        typed: new_category,
    };
    let result = ctx.api.add_product(draft, &selection)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_categories(ctx: &StockroomContext) -> Result<()> {
    let result = ctx.api.categories()?;
    print!("{}", render_categories(&result.categories));
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &StockroomContext, args: ListArgs) -> Result<()> {
    let per_page = args
        .per_page
        .unwrap_or_else(|| ctx.config.results_per_page.to_string());
    let query = ListQuery {
        category: args.category,
        sort: args.sort.into(),
    };

    let result = ctx.api.list_products(query, args.page, &per_page)?;
    let output = match args.view {
        ViewMode::List => render_product_list(&result.listed_products),
        ViewMode::Grid => render_product_grid(&result.listed_products),
    };
    print!("{}", output);
    if let Some(info) = &result.page {
        print!("{}", render_page_footer(info));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &StockroomContext, id: &str) -> Result<()> {
    let result = ctx.api.view_product(id)?;
    if let Some(product) = &result.product {
        print!("{}", render_product_detail(product));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut StockroomContext, id: &str, yes: bool) -> Result<()> {
    let target = ctx.api.preview_delete(id)?;

    if !yes {
        print!("{}", render_delete_prompt(&target));
        io::stdout().flush()?;
        if !read_confirmation(io::stdin().lock())? {
            println!("Delete cancelled.");
            return Ok(());
        }
    }

    let result = ctx.api.delete_product(&target)?;
    print_messages(&result.messages);
    Ok(())
}

fn read_confirmation(mut input: impl BufRead) -> Result<bool> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

fn handle_config(ctx: &StockroomContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if show_all {
        if let Some(config) = &result.config {
            println!("{} = {}", KEY_RESULTS_PER_PAGE, config.results_per_page);
            println!("{} = {}", KEY_DEFAULT_CATEGORY, config.default_category);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &StockroomContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}
