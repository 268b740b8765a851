use std::error::Error;

use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::checkout::deposit::{projected_spend, DepositCalculation};

const BAR_COLOR: RGBColor = RGBColor(59, 130, 246);
const CEILING_COLOR: RGBColor = RGBColor(239, 68, 68);

#[derive(Properties, PartialEq)]
pub struct Props {
    pub calculation: DepositCalculation,
}

/// Nothing is plotted when the window is empty or usage costs nothing.
fn should_plot(calc: &DepositCalculation) -> bool {
    calc.days > 0 && calc.raw_cost > 0.0
}

fn clear(canvas: HtmlCanvasElement) -> Result<(), Box<dyn Error>> {
    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;
    root.present()?;
    Ok(())
}

fn draw(canvas: HtmlCanvasElement, calc: &DepositCalculation) -> Result<(), Box<dyn Error>> {
    canvas.set_width(480);
    canvas.set_height(220);

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let series = projected_spend(calc);
    let top = calc.required_deposit.max(f64::EPSILON) * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption("Projected spend vs. deposit", ("sans-serif", 16))
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0..calc.days + 1, 0f64..top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("day")
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    chart.draw_series(series.iter().map(|&(day, spent)| {
        Rectangle::new([(day - 1, 0.0), (day, spent)], BAR_COLOR.filled())
    }))?;

    chart.draw_series(LineSeries::new(
        vec![(0, calc.required_deposit), (calc.days + 1, calc.required_deposit)],
        CEILING_COLOR.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

/// Bar chart of cumulative usage cost with the required deposit as a ceiling.
#[function_component]
pub fn DepositChart(props: &Props) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |calc| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let drawn = if should_plot(calc) {
                        draw(canvas, calc)
                    } else {
                        clear(canvas)
                    };
                    if let Err(e) = drawn {
                        warn!("Failed to draw deposit chart: {}", e);
                    }
                }
                || ()
            },
            props.calculation.clone(),
        );
    }

    html! {
        <div class="deposit-chart">
            <canvas
                ref={canvas_ref}
                width="480"
                height="220"
                style="max-width: 100%; border-radius: 12px;"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::sample_countries;
    use crate::checkout::deposit::calculate_deposit;

    fn us_business() -> crate::catalog::models::Plan {
        sample_countries()
            .into_iter()
            .flat_map(|c| c.plans)
            .find(|p| p.id == "us-business-5gb")
            .unwrap()
    }

    #[test]
    fn plots_only_when_usage_costs_something() {
        let plan = us_business();
        assert!(should_plot(&calculate_deposit(Some(&plan), 14, 50)));
        assert!(!should_plot(&calculate_deposit(Some(&plan), 14, 0)));
        assert!(!should_plot(&calculate_deposit(None, 14, 50)));
    }
}
