//! Demonstration drivers, one per pattern.
//!
//! Each driver builds the pattern's participants, exercises them and returns
//! the resulting lines. Nothing here prints.

use tracing::instrument;

use crate::behavioural::chain::{checkout_summary, DiscountChain};
use crate::behavioural::command::{Calculator, CalculatorCommand, CalculatorInvoker};
use crate::behavioural::interpreter::Expression;
use crate::behavioural::observer::{NewsOutlet, NewsPublisher};
use crate::behavioural::state::{MusicPlayer, PlayerState};
use crate::behavioural::strategy::{strategy_for, Ascending, Sorter};
use crate::behavioural::template_method::{Cake, Recipe, Soup};
use crate::config::Settings;
use crate::creational::abstract_factory::{create_interface, factory_for, Theme};
use crate::creational::builder::{BasicComputerBuilder, Director, GamingComputerBuilder};
use crate::creational::factory_method::{interact, AnimalFactory};
use crate::creational::prototype::Product;
use crate::creational::singleton::{configure, describe, AppConfiguration};
use crate::error::PatternResult;
use crate::structural::adapter::{use_printer, ModernPrinter, PrinterAdapter};
use crate::structural::bridge::{Circle, Green, Red, Shape as _, Square};
use crate::structural::composite::{Group, Render, Shape};
use crate::structural::decorator::{ConcreteComponent, Decorator, Operation};
use crate::structural::facade::ComputerFacade;
use crate::structural::proxy::{Image, ImageProxy};

pub fn chain_of_responsibility(settings: &Settings) -> PatternResult<Vec<String>> {
    let chain = DiscountChain::from_tiers(&settings.discount.tiers);
    let mut lines = Vec::new();
    for purchase in [250.0, 120.0, 400.0, 50.0] {
        lines.push(format!("Purchase of {purchase}:"));
        lines.extend(checkout_summary(&chain, purchase).into_iter().map(|l| format!("  {l}")));
    }
    Ok(lines)
}

pub fn command(_settings: &Settings) -> PatternResult<Vec<String>> {
    let mut calculator = Calculator::new();
    let mut invoker = CalculatorInvoker::new();
    let commands = [
        CalculatorCommand::Add(5.0),
        CalculatorCommand::Subtract(2.0),
        CalculatorCommand::Multiply(3.0),
        CalculatorCommand::Divide(2.0),
    ];
    for command in commands {
        invoker.push(command);
    }
    invoker.execute_all(&mut calculator);

    let queued = commands.iter().map(ToString::to_string).collect::<Vec<_>>();
    Ok(vec![
        format!("Queued: {}", queued.join(", ")),
        format!("Result: {}", calculator.value()),
    ])
}

pub fn interpreter(_settings: &Settings) -> PatternResult<Vec<String>> {
    let built = Expression::subtract(
        Expression::add(Expression::number(10), Expression::number(5)),
        Expression::number(2),
    );
    let parsed = Expression::parse("20 - (4 + 6) + 1")?;
    Ok(vec![
        format!("{built} = {}", built.evaluate()?),
        format!("{parsed} = {}", parsed.evaluate()?),
    ])
}

pub fn observer(_settings: &Settings) -> PatternResult<Vec<String>> {
    let mut publisher = NewsPublisher::new();
    let abc = publisher.subscribe(NewsOutlet::new("ABC"));
    publisher.subscribe(NewsOutlet::new("BBC"));

    let mut lines = publisher.publish("New scientific breakthrough!");
    publisher.unsubscribe(abc);
    lines.extend(publisher.publish("Markets close higher."));
    Ok(lines)
}

pub fn state(_settings: &Settings) -> PatternResult<Vec<String>> {
    let mut player = MusicPlayer::new();
    let mut transitions = vec![player.play(), player.stop(), player.pause()];

    player.set_state(PlayerState::Playing);
    transitions.extend([player.play(), player.pause(), player.stop()]);

    Ok(transitions
        .into_iter()
        .map(|t| format!("[{} -> {}] {}", t.from, t.to, t.message))
        .collect())
}

pub fn strategy(settings: &Settings) -> PatternResult<Vec<String>> {
    let numbers = [5, 2, 8, 1, 9];
    let mut sorter = Sorter::new(Ascending);
    let mut lines = vec![format!("{}: {:?}", sorter.strategy_name(), sorter.sort(&numbers))];

    sorter.set_strategy(strategy_for(&settings.sort_order)?);
    lines.push(format!(
        "{} (configured): {:?}",
        sorter.strategy_name(),
        sorter.sort(&numbers)
    ));
    Ok(lines)
}

pub fn template_method(_settings: &Settings) -> PatternResult<Vec<String>> {
    let recipes: [&dyn Recipe; 2] = [&Cake, &Soup];
    Ok(recipes.iter().flat_map(|r| r.follow()).collect())
}

pub fn abstract_factory(settings: &Settings) -> PatternResult<Vec<String>> {
    let configured: Theme = settings.theme.parse()?;
    let mut lines = Vec::new();
    for theme in Theme::ALL {
        let factory = factory_for(theme);
        let (button, text_box) = create_interface(factory.as_ref());
        let marker = if theme == configured { " (configured)" } else { "" };
        lines.push(format!("{theme}{marker}:"));
        lines.push(format!("  {}", button.paint()));
        lines.push(format!("  {}", text_box.show()));
    }
    Ok(lines)
}

pub fn builder(_settings: &Settings) -> PatternResult<Vec<String>> {
    let director = Director;
    Ok(vec![
        director.build(BasicComputerBuilder::default()).to_string(),
        director.build(GamingComputerBuilder::default()).to_string(),
    ])
}

pub fn factory_method(_settings: &Settings) -> PatternResult<Vec<String>> {
    let factory = AnimalFactory::with_defaults();
    let mut lines = Vec::new();
    for key in ["dog", "cat", "dragon"] {
        match interact(&factory, key) {
            Ok(line) => lines.push(line),
            Err(e) => lines.push(format!("Rejected: {e}")),
        }
    }
    Ok(lines)
}

pub fn prototype(_settings: &Settings) -> PatternResult<Vec<String>> {
    let prototype = Product::new("Basic product", 100, "This is a basic product");
    let custom = prototype.clone_with(|p| {
        p.name = "Custom product".to_string();
        p.price = 150;
        p.description = "This is a custom product".to_string();
    });
    Ok(vec![prototype.to_string(), custom.to_string()])
}

pub fn singleton(_settings: &Settings) -> PatternResult<Vec<String>> {
    let mut config = AppConfiguration::new();
    let before = describe(&config);
    configure(&mut config, "value1");
    Ok(vec![
        format!("Before: {before}"),
        format!("After:  {}", describe(&config)),
    ])
}

pub fn adapter(_settings: &Settings) -> PatternResult<Vec<String>> {
    let adapter = PrinterAdapter::new(ModernPrinter);
    Ok(vec![use_printer(&adapter)])
}

pub fn bridge(_settings: &Settings) -> PatternResult<Vec<String>> {
    Ok(vec![
        Circle::new(Box::new(Red)).draw(),
        Square::new(Box::new(Green)).draw(),
    ])
}

/// The sample hierarchy used by the composite demo and the `tree` command.
pub fn sample_shapes(settings: &Settings) -> Group {
    let mut first = Group::with_separator(settings.separator.clone()).named("Group 1");
    first.add(Shape::new("Circle")).add(Shape::new("Square"));

    let mut second = Group::with_separator(settings.separator.clone()).named("Group 2");
    second.add(Shape::new("Triangle"));

    let mut all = Group::with_separator(settings.separator.clone()).named("All shapes");
    all.add(first).add(second);
    all
}

#[instrument(level = "debug", skip_all)]
pub fn composite(settings: &Settings) -> PatternResult<Vec<String>> {
    let all = sample_shapes(settings);
    let mut lines = vec![Shape::new("Circle").render()];
    lines.extend(all.children().iter().map(Render::render));
    lines.push(all.render());
    Ok(lines)
}

pub fn decorator(_settings: &Settings) -> PatternResult<Vec<String>> {
    let a = Decorator::new("Decorator A", ConcreteComponent);
    let b = Decorator::new("Decorator B", ConcreteComponent);
    let stacked = Decorator::new("Decorator B", Decorator::new("Decorator A", ConcreteComponent));
    Ok(vec![a.operation(), b.operation(), stacked.operation()])
}

pub fn facade(_settings: &Settings) -> PatternResult<Vec<String>> {
    let mut computer = ComputerFacade::new();
    let mut lines = computer.power_on();
    lines.extend(computer.power_off());
    Ok(lines)
}

pub fn proxy(_settings: &Settings) -> PatternResult<Vec<String>> {
    let image = ImageProxy::new("image.png");
    let mut lines = vec![format!("Loaded before display: {}", image.is_loaded())];
    lines.extend(image.display());
    lines.extend(image.display());
    Ok(lines)
}
