use store_sales_features::domain::columns;
use store_sales_features::{
    FeatureError, build_features, build_holidays, read_sales, rmspe, rmspe_for_training, write_features,
    write_holidays,
};

const SALES_CSV: &str = "\
Store,DayOfWeek,Date,Sales,Promo,StateHoliday,SchoolHoliday,CompetitionOpenSinceMonth,CompetitionOpenSinceYear,Promo2,Promo2SinceWeek,Promo2SinceYear,PromoInterval
1,5,2015-07-31,5263,1,0,1,9.0,2008.0,0,,,0
2,5,2015-07-31,6064,1,0,1,11.0,2007.0,1,13.0,2010.0,\"Jan,Apr,Jul,Oct\"
3,4,2015-07-30,8314,1,0,1,12.0,2006.0,1,14.0,2011.0,\"Jan,Apr,Jul,Oct\"
4,3,2015-04-01,13995,1,0,0,9.0,2009.0,0,,,0
5,3,2015-04-01,4822,1,a,0,4.0,2015.0,1,40.0,2015.0,\"Feb,May,Aug,Nov\"
6,2,2014-12-25,0,0,c,1,,,1,14.0,2011.0,\"Mar,Jun,Sept,Dec\"
";

#[test]
fn csv_to_features_end_to_end() {
    let table = read_sales(SALES_CSV.as_bytes()).unwrap();
    let rows = table.len();
    let featured = build_features(table).unwrap();

    assert_eq!(featured.len(), rows);
    let names = featured.column_names();
    assert!(!names.contains(&columns::PROMO_INTERVAL));
    assert!(!names.contains(&columns::MONTH_STR));
    assert_eq!(&names[names.len() - 8..], &columns::DERIVED);

    for record in &featured.records {
        assert!((1..=53).contains(&record.calendar.week_of_year));
        assert!(record.calendar.day_of_week <= 6);
        assert!(record.competition_open >= 0.0);
        assert!(record.promo_open >= 0.0);
    }

    let promo: Vec<_> = featured.records.iter().map(|r| u8::from(r.is_promo_month)).collect();
    // July in Jan/Apr/Jul/Oct, April outside Feb/May/Aug/Nov, December in Mar/Jun/Sept/Dec.
    assert_eq!(promo, vec![0, 1, 1, 0, 0, 1]);

    // Competition opened 2015-04 for store 5: zero months on 2015-04-01.
    assert_eq!(featured.records[4].competition_open, 0.0);
    // Store 6 has no competition date.
    assert_eq!(featured.records[5].competition_open, 0.0);

    let mut out = Vec::new();
    write_features(&featured, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some(
            "Store,Date,Sales,Promo,StateHoliday,SchoolHoliday,CompetitionOpenSinceMonth,CompetitionOpenSinceYear,\
             Promo2,Promo2SinceWeek,Promo2SinceYear,Year,Month,Day,DayOfWeek,WeekOfYear,CompetitionOpen,PromoOpen,IsPromoMonth"
        )
    );
    // The feed's own DayOfWeek (1 = Monday) is replaced by the 0 = Monday form.
    assert_eq!(lines.next(), Some("1,2015-07-31,5263,1,0,1,9.0,2008.0,0,,,2015,7,31,4,31,82,0,0"));
    assert_eq!(lines.count(), rows - 1);
}

#[test]
fn csv_to_holidays_end_to_end() {
    let table = read_sales(SALES_CSV.as_bytes()).unwrap();
    let holidays = build_holidays(&table).unwrap();

    let mut out = Vec::new();
    write_holidays(&holidays, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "ds,holiday\n\
         2014-12-25,school_holiday\n\
         2015-07-30,school_holiday\n\
         2015-07-31,school_holiday\n\
         2014-12-25,state_holiday\n\
         2015-04-01,state_holiday\n"
    );
}

#[test]
fn text_dates_are_a_type_error() {
    let csv = "Date,CompetitionOpenSinceYear,CompetitionOpenSinceMonth,Promo2SinceYear,Promo2SinceWeek,PromoInterval\n\
               July 31,,,,,0\n";
    let err = read_sales(csv.as_bytes()).unwrap_err();
    assert!(err.is_schema());
    assert!(matches!(err, FeatureError::TypeMismatch { ref column, line: 2, .. } if column == "Date"));
}

#[test]
fn training_metric_agrees_with_plain_rmspe() {
    let actual = [5263.0, 6064.0, 8314.0];
    let predicted = [5000.0, 6500.0, 8314.0];
    let actual_log: Vec<f64> = actual.iter().map(|v: &f64| v.ln_1p()).collect();
    let predicted_log: Vec<f64> = predicted.iter().map(|v: &f64| v.ln_1p()).collect();

    let result = rmspe_for_training(&predicted_log, &actual_log);
    assert_eq!(result.name, "rmspe");
    assert!((result.score - rmspe(&actual, &predicted)).abs() < 1e-9);
}
